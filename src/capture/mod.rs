//! Frame acquisition and interface discovery
//!
//! `FrameSource` is the seam between the capture loop and the platform.
//! `RawCapture` reads from a `pnet` datalink channel; tests feed frames from
//! memory.

pub mod addresses;
pub mod interfaces;
pub mod raw;

pub use addresses::resolve_host_addresses;
pub use interfaces::{find_interface, list_interfaces};
pub use raw::RawCapture;

use crate::error::CaptureError;

/// Result of one bounded-wait read
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome<'a> {
    /// One link-layer frame, valid until the next read
    Frame(&'a [u8]),
    /// Nothing arrived within the read timeout
    Timeout,
}

/// A source of raw link-layer frames bound to one interface
///
/// The underlying handle is released when the source is dropped.
pub trait FrameSource {
    /// Interface this source is bound to
    fn interface(&self) -> &str;

    /// Wait up to the configured timeout for the next frame
    ///
    /// Timeouts are reported as `ReadOutcome::Timeout`, not as errors.
    fn read_frame(&mut self) -> Result<ReadOutcome<'_>, CaptureError>;
}
