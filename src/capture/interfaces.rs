//! Network interface enumeration and lookup

use std::io;
use std::path::Path;

use pnet::datalink::{self, NetworkInterface};

use crate::error::CaptureError;

const SYSFS_NET: &str = "/sys/class/net";

/// Names of the capturable interfaces on this host, sorted, loopback excluded
pub fn list_interfaces() -> io::Result<Vec<String>> {
    list_interfaces_in(Path::new(SYSFS_NET))
}

/// Interface names found as entries of `dir`
pub fn list_interfaces_in(dir: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name != "lo")
        .collect();
    names.sort();
    Ok(names)
}

/// The datalink interface called `name`
pub fn find_interface(name: &str) -> Result<NetworkInterface, CaptureError> {
    if name.is_empty() {
        return Err(CaptureError::EmptyInterface);
    }

    datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| CaptureError::UnknownInterface(name.to_string()))
}
