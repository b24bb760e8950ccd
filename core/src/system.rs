//! Interface and routing queries answered by the operating system.

use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;
use pnet::util::MacAddr;

use netwatch_common::error::ScanError;

/// IPv4 identity of a local interface.
#[derive(Debug, Clone)]
pub struct InterfaceInfo {
    pub name: String,
    pub ip: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub mac: MacAddr,
}

/// Resolves an interface name to its IPv4 address, netmask and MAC.
///
/// Any interface the OS does not know, or that carries no IPv4 network or
/// hardware address, is reported as not found; the caller treats this as
/// fatal.
pub fn interface_info(name: &str) -> Result<InterfaceInfo, ScanError> {
    let interface = datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| ScanError::InterfaceNotFound(name.to_string()))?;

    interface_info_from(&interface)
}

fn interface_info_from(interface: &NetworkInterface) -> Result<InterfaceInfo, ScanError> {
    let not_found = || ScanError::InterfaceNotFound(interface.name.clone());

    let v4_net = interface
        .ips
        .iter()
        .find_map(|net| match net {
            IpNetwork::V4(v4) => Some(*v4),
            IpNetwork::V6(_) => None,
        })
        .ok_or_else(not_found)?;

    let mac = interface.mac.ok_or_else(not_found)?;

    Ok(InterfaceInfo {
        name: interface.name.clone(),
        ip: v4_net.ip(),
        netmask: v4_net.mask(),
        mac,
    })
}

/// All interfaces known to the OS, as `(kernel index, name)` pairs sorted by
/// index.
pub fn list_interfaces() -> Vec<(u32, String)> {
    let mut names: Vec<(u32, String)> = datalink::interfaces()
        .into_iter()
        .map(|iface| (iface.index, iface.name))
        .collect();
    names.sort_by_key(|(index, _)| *index);
    names
}

/// The system's default IPv4 route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRoute {
    pub interface: String,
    pub gateway: Ipv4Addr,
}

/// Reads the default route from the kernel routing table, or `None` when no
/// default route exists. Only implemented for Linux; other targets require
/// an explicit interface selection.
pub fn default_route() -> Option<DefaultRoute> {
    if cfg!(target_os = "linux") {
        let table = std::fs::read_to_string("/proc/net/route").ok()?;
        parse_route_table(&table)
    } else {
        None
    }
}

const RTF_GATEWAY: u32 = 0x2;

/// `/proc/net/route` stores addresses as little-endian hex words. The
/// default route is the entry with an all-zero destination and the
/// RTF_GATEWAY flag set.
fn parse_route_table(table: &str) -> Option<DefaultRoute> {
    for line in table.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            continue;
        }

        let Ok(flags) = u32::from_str_radix(fields[3], 16) else {
            continue;
        };
        if fields[1] != "00000000" || flags & RTF_GATEWAY == 0 {
            continue;
        }
        let Ok(raw) = u32::from_str_radix(fields[2], 16) else {
            continue;
        };

        return Some(DefaultRoute {
            interface: fields[0].to_string(),
            gateway: Ipv4Addr::from(raw.swap_bytes()),
        });
    }

    None
}
