//! End-to-end pipeline tests against mocked collaborators.
//!
//! Note the documented limitation these tests pin down: the report is built
//! entirely from ARP data. The liveness sweep only populates the kernel's
//! ARP cache and drives the progress display; a host that answered a probe
//! but is absent from the ARP table will not appear in the report.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pnet::util::MacAddr;

use netwatch_common::error::LookupError;
use netwatch_core::arp::{self, ArpEntry};
use netwatch_core::enrich::{self, GATEWAY_LABEL};
use netwatch_core::hostname::HostnameLookup;
use netwatch_core::probe::Prober;
use netwatch_core::report::{self, SELF_LABEL};
use netwatch_core::sweep::SweepCoordinator;
use netwatch_core::system::InterfaceInfo;
use netwatch_core::vendors::VendorLookup;

struct StaticVendors(HashMap<MacAddr, String>);

impl VendorLookup for StaticVendors {
    fn vendor(&self, mac: MacAddr) -> Result<String, LookupError> {
        self.0.get(&mac).cloned().ok_or(LookupError::NotFound)
    }
}

struct SilentResolver;

#[async_trait]
impl HostnameLookup for SilentResolver {
    async fn hostname(&self, _ip: Ipv4Addr) -> Result<String, LookupError> {
        Err(LookupError::Timeout)
    }
}

/// Counts probes through a shared counter, answering "alive" every time.
struct CountingProber(Arc<Mutex<usize>>);

#[async_trait]
impl Prober for CountingProber {
    async fn probe(&self, _ip: Ipv4Addr) -> bool {
        *self.0.lock().unwrap() += 1;
        true
    }
}

fn mac(s: &str) -> MacAddr {
    s.parse().unwrap()
}

fn arp_fixture() -> Vec<ArpEntry> {
    vec![
        ArpEntry {
            ip: Ipv4Addr::new(192, 168, 1, 50),
            mac: mac("11:22:33:44:55:66"),
        },
        ArpEntry {
            ip: Ipv4Addr::new(192, 168, 1, 1),
            mac: mac("aa:bb:cc:dd:ee:ff"),
        },
    ]
}

#[tokio::test]
async fn full_cycle_orders_gateway_then_own_pc() {
    let gateway = Some(Ipv4Addr::new(192, 168, 1, 1));

    let vendors = StaticVendors(HashMap::from([
        (mac("aa:bb:cc:dd:ee:ff"), "RouterCorp".to_string()),
        (mac("ff:ee:dd:cc:bb:aa"), "LaptopWorks".to_string()),
    ]));

    // Sweep first, exactly as the real cycle does. Even hosts the prober
    // reports alive only make the report through the ARP fixture below.
    let probed = Arc::new(Mutex::new(0usize));
    let addresses: Vec<Ipv4Addr> = (1..=254).map(|i| Ipv4Addr::new(192, 168, 1, i)).collect();
    SweepCoordinator::new(CountingProber(probed.clone()), 30)
        .run(addresses)
        .await;
    assert_eq!(*probed.lock().unwrap(), 254);

    let entries = arp::gateway_first(arp_fixture(), gateway);
    let records = enrich::enrich(&entries, gateway, &vendors, &SilentResolver, None).await;

    let own_iface = InterfaceInfo {
        name: "wlan0".to_string(),
        ip: Ipv4Addr::new(192, 168, 1, 99),
        netmask: Ipv4Addr::new(255, 255, 255, 0),
        mac: mac("ff:ee:dd:cc:bb:aa"),
    };
    let records = report::assemble(records, report::own_record(&own_iface, &vendors));
    let rows = report::to_rows(records);

    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0][0], "192.168.1.1");
    assert_eq!(rows[0][2], "RouterCorp");
    assert_eq!(rows[0][3], GATEWAY_LABEL);

    assert_eq!(rows[1][0], "192.168.1.99");
    assert_eq!(rows[1][1], "ff:ee:dd:cc:bb:aa");
    assert_eq!(rows[1][2], "LaptopWorks");
    assert_eq!(rows[1][3], SELF_LABEL);

    assert_eq!(rows[2][0], "192.168.1.50");
    assert_eq!(rows[2][2], "Unknown");
    assert_eq!(rows[2][3], "Unknown");
}

#[tokio::test]
async fn sweep_attempts_every_enumerated_address() {
    let probed = Arc::new(Mutex::new(0usize));
    let addresses: Vec<Ipv4Addr> = (1..=200).map(|i| Ipv4Addr::new(10, 0, 1, i)).collect();

    SweepCoordinator::new(CountingProber(probed.clone()), 30)
        .run(addresses)
        .await;

    assert_eq!(*probed.lock().unwrap(), 200);
}
