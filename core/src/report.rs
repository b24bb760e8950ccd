//! Final report assembly: the enriched ARP records plus a synthesized entry
//! for the operator's own interface.

use netwatch_common::network::host::{HostRecord, UNKNOWN};

use crate::system::InterfaceInfo;
use crate::vendors::VendorLookup;

pub const HEADERS: [&str; 4] = ["IP", "MAC", "VENDOR", "HOSTNAME"];

/// Hostname column label for the operator's own record.
pub const SELF_LABEL: &str = "Your pc";

/// Builds the record describing the scanning machine itself.
pub fn own_record(info: &InterfaceInfo, vendors: &dyn VendorLookup) -> HostRecord {
    HostRecord {
        ip: info.ip,
        mac: info.mac,
        vendor: vendors
            .vendor(info.mac)
            .unwrap_or_else(|_| UNKNOWN.to_string()),
        hostname: SELF_LABEL.to_string(),
    }
}

/// Inserts the operator's record right behind the gateway (index 1). With an
/// empty ARP table the insertion clamps to the end, so a report is produced
/// either way.
pub fn assemble(mut records: Vec<HostRecord>, own: HostRecord) -> Vec<HostRecord> {
    let at = records.len().min(1);
    records.insert(at, own);
    records
}

/// Rows in render order, one `[ip, mac, vendor, hostname]` array per host.
pub fn to_rows(records: Vec<HostRecord>) -> Vec<[String; 4]> {
    records.into_iter().map(HostRecord::into_row).collect()
}
