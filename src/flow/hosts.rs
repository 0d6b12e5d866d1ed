//! Host address set and RTP port window

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::ops::RangeInclusive;

use crate::constants::{DEFAULT_RTP_PORT_MAX, DEFAULT_RTP_PORT_MIN};

/// IPv4 addresses assigned to the monitored interface
///
/// Resolved once at startup and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAddressSet {
    addrs: HashSet<Ipv4Addr>,
}

impl HostAddressSet {
    pub fn new(addrs: impl IntoIterator<Item = Ipv4Addr>) -> Self {
        Self {
            addrs: addrs.into_iter().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, addr: &Ipv4Addr) -> bool {
        self.addrs.contains(addr)
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// Addresses in ascending order, for logging
    pub fn sorted(&self) -> Vec<Ipv4Addr> {
        let mut addrs: Vec<_> = self.addrs.iter().copied().collect();
        addrs.sort();
        addrs
    }
}

impl FromIterator<Ipv4Addr> for HostAddressSet {
    fn from_iter<I: IntoIterator<Item = Ipv4Addr>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Inclusive UDP port range that RTP flows are expected to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortWindow {
    min: u16,
    max: u16,
}

impl PortWindow {
    /// Bounds are normalized so that `min <= max`
    pub fn new(min: u16, max: u16) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    #[inline]
    pub fn contains(&self, port: u16) -> bool {
        (self.min..=self.max).contains(&port)
    }

    /// True when either end of the flow uses a port inside the window
    #[inline]
    pub fn matches(&self, source_port: u16, destination_port: u16) -> bool {
        self.contains(source_port) || self.contains(destination_port)
    }

    pub fn range(&self) -> RangeInclusive<u16> {
        self.min..=self.max
    }
}

impl Default for PortWindow {
    fn default() -> Self {
        Self::new(DEFAULT_RTP_PORT_MIN, DEFAULT_RTP_PORT_MAX)
    }
}
