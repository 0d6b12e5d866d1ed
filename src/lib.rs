//! # RTP Live Monitor
//!
//! Watches live traffic on one network interface, picks out UDP flows that
//! look like RTP and shows packet rates and the dominant direction in a
//! terminal dashboard.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         CAPTURE LOOP (monitor)                        │
//! │                                                                      │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐              │
//! │  │ FrameSource  │──▶│Header Decoder│──▶│RTP Heuristic │              │
//! │  │   (pnet)     │   │  (packet)    │   │ (packet::rtp)│              │
//! │  └──────────────┘   └──────────────┘   └──────┬───────┘              │
//! │                                               │                      │
//! │                                               ▼                      │
//! │                     ┌──────────────┐   ┌──────────────┐              │
//! │                     │    Stats     │◀──│Flow Classifier│◀─ host addrs │
//! │                     │  Aggregator  │   │   (flow)     │              │
//! │                     └──────┬───────┘   └──────────────┘              │
//! │                            │ snapshot once per second                │
//! │                            ▼                                         │
//! │                     ┌──────────────┐   ┌──────────────┐              │
//! │                     │  Dashboard   │──▶│    Screen    │──▶ terminal   │
//! │                     │  Renderer    │   │ (crossterm)  │              │
//! │                     └──────────────┘   └──────┬───────┘              │
//! │                                               │ 'q' quits            │
//! └───────────────────────────────────────────────┴──────────────────────┘
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod monitor;
pub mod packet;
pub mod stats;
pub mod ui;

pub use error::{Error, Result};

/// Application-wide constants
pub mod constants {
    /// Ethernet II header length
    pub const ETHERNET_HEADER_LEN: usize = 14;

    /// Minimum IPv4 header length (IHL = 5)
    pub const IPV4_MIN_HEADER_LEN: usize = 20;

    /// UDP header length
    pub const UDP_HEADER_LEN: usize = 8;

    /// Minimum RTP fixed header size
    pub const RTP_HEADER_LEN: usize = 12;

    /// RTP version carried in the top two bits of the first header byte
    pub const RTP_VERSION: u8 = 2;

    /// Ethertype for IPv4
    pub const ETHERTYPE_IPV4: u16 = 0x0800;

    /// IP protocol number for UDP
    pub const IPPROTO_UDP: u8 = 17;

    /// Lowest port considered part of an RTP flow
    pub const DEFAULT_RTP_PORT_MIN: u16 = 10_000;

    /// Highest port considered part of an RTP flow
    pub const DEFAULT_RTP_PORT_MAX: u16 = 65_000;

    /// Bounded wait for a single frame read
    pub const DEFAULT_READ_TIMEOUT_MS: u64 = 200;

    /// Dashboard sampling interval
    pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 1000;

    /// Largest frame read from the capture socket
    pub const DEFAULT_SNAP_LEN: usize = 65_535;

    /// Rate gauges stop growing past this many characters
    pub const BAR_CAP: u64 = 50;
}
