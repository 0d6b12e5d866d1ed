//! Link, network and transport header decoding
//!
//! Everything here is pure: frames are borrowed, nothing is allocated, and
//! out-of-scope frames come back as plain outcome values.

pub mod headers;
pub mod rtp;

pub use headers::{decode, DecodeOutcome, Ipv4Header, ParsedHeaders, UdpHeader};
pub use rtp::looks_like_rtp;
