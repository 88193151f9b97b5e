use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, timeout};
use tracing::{error, info};

use crate::error::Error;
use crate::keep_alive::target::PingTarget;

/// Counters shared between the keep-alive task and its handle.
#[derive(Debug, Default)]
pub struct PingStats {
    ticks: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
}

impl PingStats {
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    pub fn successes(&self) -> u64 {
        self.successes.load(Ordering::SeqCst)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::SeqCst)
    }
}

/// Pings a target on a fixed period so that an idle host never goes to sleep.
///
/// Failures are logged and forgotten; the next attempt is simply the next tick.
pub struct KeepAlive<T> {
    target: T,
    period: Duration,
    stats: Arc<PingStats>,
}

pub struct KeepAliveHandle {
    task: JoinHandle<()>,
    stats: Arc<PingStats>,
}

impl KeepAliveHandle {
    pub fn stats(&self) -> &PingStats {
        &self.stats
    }

    /// Cancels the loop. A ping in flight is dropped.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl<T> KeepAlive<T>
where
    T: PingTarget + Send + Sync + 'static,
{
    pub fn new(target: T, period: Duration) -> Self {
        KeepAlive {
            target,
            period,
            stats: Arc::new(PingStats::default()),
        }
    }

    /// One ping, logged either way. Returns whether it succeeded.
    ///
    /// A ping that has not settled within one period counts as a failure, so a
    /// host that accepts connections but never answers cannot stall the loop.
    pub async fn tick(&self) -> bool {
        self.stats.ticks.fetch_add(1, Ordering::SeqCst);
        let outcome = timeout(self.period, self.target.ping())
            .await
            .unwrap_or_else(|_| Err(Error::Timeout(self.period)));
        match outcome {
            Ok(()) => {
                self.stats.successes.fetch_add(1, Ordering::SeqCst);
                info!(url = %self.target.describe(), "website reloaded");
                true
            }
            Err(e) => {
                self.stats.failures.fetch_add(1, Ordering::SeqCst);
                error!(url = %self.target.describe(), "Error : {}", e);
                false
            }
        }
    }

    /// Starts the loop on the current runtime. The first ping fires one full
    /// period after this call; pings are awaited in turn so they never overlap.
    pub fn spawn(self) -> KeepAliveHandle {
        let stats = self.stats.clone();
        let start = Instant::now() + self.period;
        let task = tokio::spawn(async move {
            let mut timer = interval_at(start, self.period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            info!(
                url = %self.target.describe(),
                period_ms = self.period.as_millis() as u64,
                "keep-alive started"
            );

            loop {
                timer.tick().await;
                self.tick().await;
            }
        });
        KeepAliveHandle { task, stats }
    }
}
