//! Cancellable one-second tick task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Where a session's ticks come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSource {
    /// A background task fires every period while the session runs.
    Scheduled(Duration),
    /// Nothing is spawned; the owner calls `tick_now` itself.
    Manual,
}

impl Default for TickSource {
    fn default() -> Self {
        TickSource::Scheduled(DEFAULT_TICK_PERIOD)
    }
}

/// Background task sending a unit message every period.
///
/// The first tick arrives one full period after spawning. Dropping the
/// ticker aborts the task.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    rx: mpsc::Receiver<()>,
}

impl Ticker {
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        tracing::trace!(?period, "ticker spawned");
        Self { handle, rx }
    }

    /// Wait for the next tick. `None` once the task has stopped.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::trace!("ticker cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::spawn(Duration::from_secs(1));
        for _ in 0..3 {
            ticker.recv().await.unwrap();
        }
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_aborts_the_task() {
        let ticker = Ticker::spawn(Duration::from_secs(1));
        let handle = ticker.handle.abort_handle();
        ticker.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(handle.is_finished());
    }
}
