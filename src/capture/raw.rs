//! Link-layer capture
//!
//! Opens a `pnet` Ethernet channel on a single interface and reads with a
//! receive timeout so the capture loop never blocks for long.

use std::io::{self, ErrorKind};
use std::time::Duration;

use pnet::datalink::{self, Channel, Config, DataLinkReceiver};

use crate::capture::interfaces::find_interface;
use crate::capture::{FrameSource, ReadOutcome};
use crate::error::CaptureError;

/// Raw capture bound to one interface
pub struct RawCapture {
    interface: String,
    rx: Box<dyn DataLinkReceiver>,
}

impl RawCapture {
    /// Open a capture on `interface`
    ///
    /// Needs `CAP_NET_RAW` (usually root).
    pub fn open(interface: &str, read_timeout: Duration, snap_len: usize) -> Result<Self, CaptureError> {
        let iface = find_interface(interface)?;

        let config = Config {
            read_buffer_size: snap_len,
            read_timeout: Some(read_timeout),
            promiscuous: false,
            ..Default::default()
        };

        let open_error = |source: io::Error| CaptureError::Open {
            interface: interface.to_string(),
            source,
        };
        let rx = match datalink::channel(&iface, config) {
            Ok(Channel::Ethernet(_, rx)) => rx,
            Ok(_) => {
                return Err(open_error(io::Error::new(
                    ErrorKind::Unsupported,
                    "interface does not provide an Ethernet channel",
                )))
            }
            Err(e) => return Err(open_error(e)),
        };

        tracing::info!(
            "Capture opened on {} (index {}, timeout {:?}, snap length {})",
            interface,
            iface.index,
            read_timeout,
            snap_len
        );

        Ok(Self {
            interface: interface.to_string(),
            rx,
        })
    }
}

/// Read errors that only mean "nothing arrived in time"
fn is_timeout(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
    )
}

impl FrameSource for RawCapture {
    fn interface(&self) -> &str {
        &self.interface
    }

    fn read_frame(&mut self) -> Result<ReadOutcome<'_>, CaptureError> {
        match self.rx.next() {
            Ok(frame) => Ok(ReadOutcome::Frame(frame)),
            Err(e) if is_timeout(e.kind()) => Ok(ReadOutcome::Timeout),
            Err(e) => Err(CaptureError::Read(e)),
        }
    }
}

impl Drop for RawCapture {
    fn drop(&mut self) {
        tracing::info!("Capture on {} closed", self.interface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface_rejected() {
        let result = RawCapture::open("", Duration::from_millis(200), 65_535);
        assert!(matches!(result, Err(CaptureError::EmptyInterface)));
    }

    #[test]
    fn test_unknown_interface_rejected() {
        let result = RawCapture::open("no-such-if0", Duration::from_millis(200), 65_535);
        assert!(matches!(result, Err(CaptureError::UnknownInterface(_))));
    }

    #[test]
    fn test_timeout_kinds() {
        assert!(is_timeout(ErrorKind::TimedOut));
        assert!(is_timeout(ErrorKind::WouldBlock));
        assert!(is_timeout(ErrorKind::Interrupted));
        assert!(!is_timeout(ErrorKind::PermissionDenied));
        assert!(!is_timeout(ErrorKind::Other));
    }
}
