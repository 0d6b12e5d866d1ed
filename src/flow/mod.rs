//! Flow classification
//!
//! Decides whether a decoded UDP datagram belongs to an RTP flow and, if so,
//! which way it travels relative to the local host.

pub mod classifier;
pub mod hosts;

pub use classifier::{Classification, FlowClassifier};
pub use hosts::{HostAddressSet, PortWindow};
