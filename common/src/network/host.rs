use std::net::Ipv4Addr;

use pnet::util::MacAddr;

/// Sentinel rendered for any enrichment lookup that did not produce a value.
pub const UNKNOWN: &str = "Unknown";

/// One row of the final report.
///
/// Address and MAC come from the ARP table; vendor and hostname are attached
/// later by the enrichment pass and degrade to [`UNKNOWN`] on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub ip: Ipv4Addr,
    pub mac: MacAddr,
    pub vendor: String,
    pub hostname: String,
}

impl HostRecord {
    pub fn new(ip: Ipv4Addr, mac: MacAddr) -> Self {
        Self {
            ip,
            mac,
            vendor: UNKNOWN.to_string(),
            hostname: UNKNOWN.to_string(),
        }
    }

    pub fn into_row(self) -> [String; 4] {
        [
            self.ip.to_string(),
            self.mac.to_string(),
            self.vendor,
            self.hostname,
        ]
    }
}
