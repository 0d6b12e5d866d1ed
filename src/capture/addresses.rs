//! Host address resolution

use std::net::IpAddr;

use crate::capture::interfaces::find_interface;
use crate::error::CaptureError;
use crate::flow::HostAddressSet;

/// IPv4 addresses currently assigned to `interface`
///
/// An interface that exists but has no IPv4 address yields an empty set.
/// A name that matches no interface at all is an error.
pub fn resolve_host_addresses(interface: &str) -> Result<HostAddressSet, CaptureError> {
    let iface = find_interface(interface)?;
    let hosts = ipv4_hosts(iface.ips.iter().map(|network| network.ip()));

    tracing::info!("Host addresses on {}: {:?}", interface, hosts.sorted());
    Ok(hosts)
}

/// Keeps the IPv4 entries of an interface's address list
fn ipv4_hosts(ips: impl IntoIterator<Item = IpAddr>) -> HostAddressSet {
    ips.into_iter()
        .filter_map(|ip| match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .collect()
}
