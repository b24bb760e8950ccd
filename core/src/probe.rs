use std::net::Ipv4Addr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Reachability check for a single address.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Best-effort: an inability to probe counts as unreachable, never as an
    /// error.
    async fn probe(&self, ip: Ipv4Addr) -> bool;
}

/// Probes by spawning the system `ping` utility, one echo request per
/// attempt. No raw sockets, so no elevated privileges are needed.
pub struct PingProber {
    timeout: Duration,
    attempts: u32,
}

impl PingProber {
    pub fn new(timeout: Duration, attempts: u32) -> Self {
        Self { timeout, attempts }
    }

    async fn ping_once(&self, ip: Ipv4Addr) -> bool {
        let status = Command::new("ping")
            .args(["-n", "-q", "-c", "1"])
            .arg(ip.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        // The timeout is enforced here rather than via `ping -W`; fractional
        // second values for -W are not portable across iputils releases.
        match tokio::time::timeout(self.timeout, status).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                debug!("failed to spawn ping for {ip}: {e}");
                false
            }
            Err(_elapsed) => false,
        }
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, ip: Ipv4Addr) -> bool {
        for _ in 0..self.attempts {
            if self.ping_once(ip).await {
                return true;
            }
        }
        false
    }
}
