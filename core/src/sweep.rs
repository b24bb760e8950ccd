//! The concurrent liveness sweep.
//!
//! A fixed pool of workers drains a shared queue of addresses, probing each
//! one exactly once, while a reporter task derives a completion percentage
//! from the shrinking queue depth. A stale depth reading can only
//! under-report progress, so the percentage is monotone without any extra
//! bookkeeping and lands on 100 exactly when the queue empties.
//!
//! Probe results are deliberately discarded: the final report is built from
//! the ARP table, which the sweep has just populated by forcing the kernel
//! to resolve every reachable neighbor. A host that answered a probe but
//! never made it into the ARP cache is not reported. This mirrors the tool's
//! historical behavior and is covered by the integration tests as a
//! documented limitation.

use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::probe::Prober;

const REPORT_INTERVAL: Duration = Duration::from_millis(10);

/// Callback receiving percentage-complete updates (0..=100).
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// `floor(100 * done / total)`, with an empty workload counting as finished.
pub fn percentage(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (100 * done / total) as u8
}

type WorkQueue = Arc<Mutex<VecDeque<Ipv4Addr>>>;

/// Drives a bounded pool of probing workers over an address queue.
pub struct SweepCoordinator<P> {
    prober: Arc<P>,
    pool_size: usize,
    on_progress: Option<ProgressFn>,
}

impl<P: Prober + 'static> SweepCoordinator<P> {
    pub fn new(prober: P, pool_size: usize) -> Self {
        Self {
            prober: Arc::new(prober),
            pool_size,
            on_progress: None,
        }
    }

    pub fn with_progress(mut self, on_progress: ProgressFn) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Probes every address exactly once, returning only after every worker
    /// and the reporter have terminated.
    ///
    /// The queue is fully loaded before the first worker starts, each pop is
    /// exclusive, and a worker exits on the first empty pop, so the sum of
    /// pops across workers equals the queue's initial size.
    pub async fn run(&self, addresses: Vec<Ipv4Addr>) {
        let total = addresses.len();
        let queue: WorkQueue = Arc::new(Mutex::new(addresses.into_iter().collect()));

        let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(self.pool_size + 1);

        if let Some(on_progress) = self.on_progress.clone() {
            handles.push(tokio::spawn(report_progress(
                queue.clone(),
                total,
                on_progress,
            )));
        }

        for _ in 0..self.pool_size {
            let queue = queue.clone();
            let prober = self.prober.clone();
            handles.push(tokio::spawn(async move {
                loop {
                    let next = queue.lock().await.pop_front();
                    let Some(ip) = next else { break };
                    let _alive = prober.probe(ip).await;
                }
            }));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                debug!("sweep worker aborted: {e}");
            }
        }
    }
}

/// Polls the queue depth until it observes the queue empty, emitting the
/// percentage after every observation (so 100 is always the last value).
async fn report_progress(queue: WorkQueue, total: usize, on_progress: ProgressFn) {
    loop {
        let remaining = queue.lock().await.len();
        on_progress(percentage(total - remaining, total));
        if remaining == 0 {
            break;
        }
        tokio::time::sleep(REPORT_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex as StdMutex;

    /// Records every address it is asked about.
    struct RecordingProber {
        probed: StdMutex<Vec<Ipv4Addr>>,
        delay: Duration,
    }

    impl RecordingProber {
        fn new(delay: Duration) -> Self {
            Self {
                probed: StdMutex::new(Vec::new()),
                delay,
            }
        }
    }

    #[async_trait]
    impl Prober for RecordingProber {
        async fn probe(&self, ip: Ipv4Addr) -> bool {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.probed.lock().unwrap().push(ip);
            false
        }
    }

    fn addresses(n: u32) -> Vec<Ipv4Addr> {
        (1..=n).map(|i| Ipv4Addr::from(0x0a000000 + i)).collect()
    }

    #[tokio::test]
    async fn every_address_is_probed_exactly_once() {
        let ips = addresses(200);
        let coordinator = SweepCoordinator::new(RecordingProber::new(Duration::ZERO), 30);
        coordinator.run(ips.clone()).await;

        let probed = coordinator.prober.probed.lock().unwrap();
        assert_eq!(probed.len(), ips.len());

        let unique: HashSet<&Ipv4Addr> = probed.iter().collect();
        assert_eq!(unique.len(), ips.len(), "an address was probed twice");
        let expected: HashSet<&Ipv4Addr> = ips.iter().collect();
        assert_eq!(unique, expected);
    }

    #[tokio::test]
    async fn completes_with_more_workers_than_addresses() {
        let ips = addresses(3);
        let coordinator = SweepCoordinator::new(RecordingProber::new(Duration::ZERO), 30);
        coordinator.run(ips).await;
        assert_eq!(coordinator.prober.probed.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn empty_queue_terminates_and_reports_completion() {
        let seen: Arc<StdMutex<Vec<u8>>> = Arc::new(StdMutex::new(Vec::new()));
        let sink = seen.clone();

        let coordinator = SweepCoordinator::new(RecordingProber::new(Duration::ZERO), 4)
            .with_progress(Arc::new(move |pct| sink.lock().unwrap().push(pct)));
        coordinator.run(Vec::new()).await;

        let seen = seen.lock().unwrap();
        assert_eq!(*seen.last().unwrap(), 100);
    }

    #[tokio::test]
    async fn progress_is_monotone_and_ends_at_100() {
        let seen: Arc<StdMutex<Vec<u8>>> = Arc::new(StdMutex::new(Vec::new()));
        let sink = seen.clone();

        let coordinator =
            SweepCoordinator::new(RecordingProber::new(Duration::from_millis(2)), 8)
                .with_progress(Arc::new(move |pct| sink.lock().unwrap().push(pct)));
        coordinator.run(addresses(64)).await;

        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "progress regressed");
        assert_eq!(*seen.last().unwrap(), 100);
    }

    #[test]
    fn percentage_is_floored() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 66);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(0, 0), 100);
    }
}
