//! Ethernet II / IPv4 / UDP header decoding
//!
//! `decode` walks a raw link-layer frame and either yields a borrowed view of
//! the UDP datagram or says why the frame is out of scope. Skips are frequent
//! and expected, so they are ordinary enum variants rather than errors.

use std::net::Ipv4Addr;

use crate::constants::{
    ETHERNET_HEADER_LEN, ETHERTYPE_IPV4, IPPROTO_UDP, IPV4_MIN_HEADER_LEN, UDP_HEADER_LEN,
};

/// Decoded IPv4 header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header {
    /// Header length in bytes (IHL x 4)
    pub header_len: usize,
    /// Transport protocol number
    pub protocol: u8,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
}

/// Decoded UDP header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    /// Length declared in the header (header + payload)
    pub length: u16,
}

/// Borrowed view over one Ethernet/IPv4/UDP frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedHeaders<'a> {
    pub ethertype: u16,
    pub ipv4: Ipv4Header,
    pub udp: UdpHeader,
    /// Everything after the UDP header up to the end of the frame
    pub payload: &'a [u8],
}

/// Result of decoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome<'a> {
    /// An IPv4 UDP datagram
    Udp(ParsedHeaders<'a>),
    /// Ethertype is not IPv4
    NotIpv4,
    /// IPv4, but not UDP
    NotUdp,
    /// Frame ends before a required header does
    TooShort,
}

impl<'a> DecodeOutcome<'a> {
    /// Headers of a UDP frame, `None` for every skip outcome
    pub fn udp(self) -> Option<ParsedHeaders<'a>> {
        match self {
            DecodeOutcome::Udp(headers) => Some(headers),
            _ => None,
        }
    }
}

/// Decode a raw link-layer frame
pub fn decode(frame: &[u8]) -> DecodeOutcome<'_> {
    let Some(ethernet) = frame.get(..ETHERNET_HEADER_LEN) else {
        return DecodeOutcome::TooShort;
    };

    let ethertype = u16::from_be_bytes([ethernet[12], ethernet[13]]);
    if ethertype != ETHERTYPE_IPV4 {
        return DecodeOutcome::NotIpv4;
    }

    let Some(ip) = frame.get(ETHERNET_HEADER_LEN..ETHERNET_HEADER_LEN + IPV4_MIN_HEADER_LEN) else {
        return DecodeOutcome::TooShort;
    };

    let header_len = usize::from(ip[0] & 0x0F) * 4;
    if header_len < IPV4_MIN_HEADER_LEN {
        return DecodeOutcome::TooShort;
    }

    let protocol = ip[9];
    if protocol != IPPROTO_UDP {
        return DecodeOutcome::NotUdp;
    }

    let ipv4 = Ipv4Header {
        header_len,
        protocol,
        source: Ipv4Addr::new(ip[12], ip[13], ip[14], ip[15]),
        destination: Ipv4Addr::new(ip[16], ip[17], ip[18], ip[19]),
    };

    let udp_offset = ETHERNET_HEADER_LEN + header_len;
    let payload_offset = udp_offset + UDP_HEADER_LEN;
    let Some(udp) = frame.get(udp_offset..payload_offset) else {
        return DecodeOutcome::TooShort;
    };

    let udp = UdpHeader {
        source_port: u16::from_be_bytes([udp[0], udp[1]]),
        destination_port: u16::from_be_bytes([udp[2], udp[3]]),
        length: u16::from_be_bytes([udp[4], udp[5]]),
    };

    DecodeOutcome::Udp(ParsedHeaders {
        ethertype,
        ipv4,
        udp,
        payload: &frame[payload_offset..],
    })
}
