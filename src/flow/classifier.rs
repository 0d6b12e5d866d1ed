//! RTP flow classifier
//!
//! A datagram counts when either port falls inside the RTP port window and
//! the payload passes the RTP heuristic. Counted datagrams addressed to one
//! of the host's addresses are inbound; everything else is outbound,
//! including traffic the host merely forwards.

use crate::flow::hosts::{HostAddressSet, PortWindow};
use crate::packet::{self, looks_like_rtp, ParsedHeaders};

/// What to do with one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Not an RTP flow, or not a UDP frame at all
    Ignored,
    /// RTP addressed to the local host
    Inbound,
    /// Any other RTP
    Outbound,
}

/// Classifies decoded frames against the host's addresses
#[derive(Debug, Clone)]
pub struct FlowClassifier {
    window: PortWindow,
    hosts: HostAddressSet,
}

impl FlowClassifier {
    pub fn new(window: PortWindow, hosts: HostAddressSet) -> Self {
        Self { window, hosts }
    }

    pub fn window(&self) -> PortWindow {
        self.window
    }

    pub fn hosts(&self) -> &HostAddressSet {
        &self.hosts
    }

    /// Classify an already decoded UDP datagram
    pub fn classify(&self, headers: &ParsedHeaders<'_>) -> Classification {
        if !self
            .window
            .matches(headers.udp.source_port, headers.udp.destination_port)
        {
            return Classification::Ignored;
        }

        if !looks_like_rtp(headers.payload) {
            return Classification::Ignored;
        }

        if self.hosts.contains(&headers.ipv4.destination) {
            Classification::Inbound
        } else {
            Classification::Outbound
        }
    }

    /// Decode and classify a raw frame
    pub fn classify_frame(&self, frame: &[u8]) -> Classification {
        match packet::decode(frame).udp() {
            Some(headers) => self.classify(&headers),
            None => Classification::Ignored,
        }
    }
}
