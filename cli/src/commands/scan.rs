use std::sync::Arc;

use anyhow::Context;

use netwatch_common::config::ScanConfig;
use netwatch_common::network::subnet;
use netwatch_core::hostname::MdnsResolver;
use netwatch_core::probe::PingProber;
use netwatch_core::sweep::{ProgressFn, SweepCoordinator};
use netwatch_core::vendors::OuiVendorDb;
use netwatch_core::{arp, enrich, report, system};

use crate::terminal::{progress, table};

/// Full scan-and-report cycle: enumerate the subnet, sweep it, read the ARP
/// table back, enrich, render.
pub async fn scan(interface: Option<&str>) -> anyhow::Result<()> {
    let cfg = ScanConfig::default();

    // The default interface is only resolved when no -i was given, so a
    // missing default route cannot break an explicit selection.
    let name = match interface {
        Some(name) => name.to_string(),
        None => system::default_route()
            .map(|route| route.interface)
            .context("no default route; select an interface with -i")?,
    };

    let info = system::interface_info(&name)?;
    let addresses = subnet::host_addresses(info.ip, info.netmask)?;

    let bar = progress::percent_bar("Scanning...");
    let on_progress: ProgressFn = {
        let bar = bar.clone();
        Arc::new(move |pct| bar.set_position(pct as u64))
    };

    SweepCoordinator::new(
        PingProber::new(cfg.probe_timeout, cfg.probe_attempts),
        cfg.pool_size,
    )
    .with_progress(on_progress)
    .run(addresses)
    .await;
    bar.finish_and_clear();

    let gateway = system::default_route().map(|route| route.gateway);
    let entries = arp::gateway_first(arp::arp_entries(&name).await?, gateway);

    let bar = progress::percent_bar("Analyzing...");
    let on_progress: ProgressFn = {
        let bar = bar.clone();
        Arc::new(move |pct| bar.set_position(pct as u64))
    };

    let vendors = OuiVendorDb;
    let resolver = MdnsResolver::new(cfg.lookup_timeout);
    let records = enrich::enrich(&entries, gateway, &vendors, &resolver, Some(&on_progress)).await;
    bar.finish_and_clear();

    let records = report::assemble(records, report::own_record(&info, &vendors));
    print!(
        "{}",
        table::render(&report::HEADERS, &report::to_rows(records))
    );

    Ok(())
}
