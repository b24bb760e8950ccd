//! Address-space math: from an interface's address and netmask to the list
//! of host addresses worth probing.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

/// Number of leading one-bits in a netmask.
pub fn prefix_len(mask: Ipv4Addr) -> u8 {
    u32::from(mask).count_ones() as u8
}

/// All usable host addresses of the subnet containing `ip`, in ascending
/// order. The network and broadcast addresses are excluded, so a /31 or /32
/// yields nothing.
pub fn host_addresses(ip: Ipv4Addr, mask: Ipv4Addr) -> anyhow::Result<Vec<Ipv4Addr>> {
    let network = Ipv4Network::new(ip, prefix_len(mask))?;
    let base: u32 = network.network().into();
    let broadcast: u32 = network.broadcast().into();

    if broadcast - base < 2 {
        return Ok(Vec::new());
    }

    Ok(((base + 1)..broadcast).map(Ipv4Addr::from).collect())
}
