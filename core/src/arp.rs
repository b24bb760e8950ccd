//! ARP table retrieval via the system `arp` utility.
//!
//! The sweep that precedes this call is what fills the kernel's ARP cache;
//! here we only read it back.

use std::net::Ipv4Addr;

use anyhow::Context;
use pnet::util::MacAddr;
use tokio::process::Command;
use tracing::debug;

/// One complete ARP cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpEntry {
    pub ip: Ipv4Addr,
    pub mac: MacAddr,
}

/// Queries the ARP table for `interface`, excluding incomplete entries.
pub async fn arp_entries(interface: &str) -> anyhow::Result<Vec<ArpEntry>> {
    let output = Command::new("arp")
        .args(["-i", interface, "-n"])
        .output()
        .await
        .context("running arp")?;

    Ok(parse_arp_output(&String::from_utf8_lossy(&output.stdout)))
}

/// Moves the gateway's entry to the front, preserving the relative order of
/// everything else.
pub fn gateway_first(mut entries: Vec<ArpEntry>, gateway: Option<Ipv4Addr>) -> Vec<ArpEntry> {
    if let Some(gw) = gateway
        && let Some(pos) = entries.iter().position(|entry| entry.ip == gw)
    {
        let entry = entries.remove(pos);
        entries.insert(0, entry);
    }
    entries
}

/// Parses `arp -n` output:
///
/// ```text
/// Address                  HWtype  HWaddress           Flags Mask            Iface
/// 192.168.1.1              ether   e8:48:b8:70:33:a1   C                     wlan0
/// 192.168.1.9                      (incomplete)                              wlan0
/// ```
///
/// Incomplete entries carry no hardware address and are skipped, as is
/// anything that does not parse as an address pair.
fn parse_arp_output(output: &str) -> Vec<ArpEntry> {
    let mut entries = Vec::new();

    for line in output.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 || fields[1] == "(incomplete)" {
            continue;
        }

        let (Ok(ip), Ok(mac)) = (fields[0].parse::<Ipv4Addr>(), fields[2].parse::<MacAddr>())
        else {
            debug!("skipping unparsable arp line: {line}");
            continue;
        };

        entries.push(ArpEntry { ip, mac });
    }

    entries
}
