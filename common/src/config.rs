use std::time::Duration;

/// Tunables for one scan-and-report cycle.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Number of concurrent probing workers draining the sweep queue.
    pub pool_size: usize,
    /// How long a single echo probe may wait for a reply.
    pub probe_timeout: Duration,
    /// Probe attempts per address before it counts as unreachable.
    pub probe_attempts: u32,
    /// Read timeout for vendor/hostname enrichment lookups.
    pub lookup_timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pool_size: 30,
            probe_timeout: Duration::from_millis(100),
            probe_attempts: 2,
            lookup_timeout: Duration::from_millis(100),
        }
    }
}
