//! Enrichment pass: attach vendor names and hostnames to ARP entries.

use std::net::Ipv4Addr;

use tracing::debug;

use netwatch_common::network::host::{HostRecord, UNKNOWN};

use crate::arp::ArpEntry;
use crate::hostname::HostnameLookup;
use crate::sweep::{ProgressFn, percentage};
use crate::vendors::VendorLookup;

/// Hostname column label for the default gateway's record.
pub const GATEWAY_LABEL: &str = "Default gateway";

/// Sequentially augments each ARP entry with vendor and hostname data,
/// reporting progress after every entry.
///
/// Lookup failures degrade to "Unknown". The gateway keeps its fixed label
/// and its hostname is never resolved.
pub async fn enrich(
    entries: &[ArpEntry],
    gateway: Option<Ipv4Addr>,
    vendors: &dyn VendorLookup,
    resolver: &dyn HostnameLookup,
    on_progress: Option<&ProgressFn>,
) -> Vec<HostRecord> {
    let total = entries.len();
    let mut records = Vec::with_capacity(total);

    for (done, entry) in entries.iter().enumerate() {
        let vendor = vendors.vendor(entry.mac).unwrap_or_else(|e| {
            debug!("vendor lookup for {} failed: {e}", entry.mac);
            UNKNOWN.to_string()
        });

        let hostname = if gateway == Some(entry.ip) {
            GATEWAY_LABEL.to_string()
        } else {
            resolver.hostname(entry.ip).await.unwrap_or_else(|e| {
                debug!("hostname lookup for {} failed: {e}", entry.ip);
                UNKNOWN.to_string()
            })
        };

        records.push(HostRecord {
            ip: entry.ip,
            mac: entry.mac,
            vendor,
            hostname,
        });

        if let Some(report) = on_progress {
            report(percentage(done + 1, total));
        }
    }

    records
}
