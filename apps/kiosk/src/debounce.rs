//! # Debounced Evaluation
//!
//! Last-query-wins delayed scheduling for search input.
//!
//! ## Semantics
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  keystroke "p"    ──► schedule(search "p")    ── aborted          │
//! │  keystroke "pi"   ──► schedule(search "pi")   ── aborted          │
//! │  keystroke "piz"  ──► schedule(search "piz")  ── sleeps 250ms ──► │
//! │                                                    runs           │
//! │                                                                   │
//! │  Scheduling aborts the previously pending task, so only the most  │
//! │  recently scheduled evaluation ever executes. No cancellation     │
//! │  token is needed: superseded tasks are dropped mid-sleep.         │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Schedules delayed evaluations where only the latest survives.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with a fixed delay.
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Schedules `task` to run after the delay, discarding any
    /// previously pending task.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            task.await;
        }));
    }

    /// Cancels the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_scheduled_runs() {
        let ran = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        for value in [1, 2, 3] {
            let ran = Arc::clone(&ran);
            debouncer.schedule(async move {
                ran.store(value, Ordering::SeqCst);
            });
        }

        sleep(Duration::from_millis(500)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_runs_before_delay() {
        let ran = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        {
            let ran = Arc::clone(&ran);
            debouncer.schedule(async move {
                ran.store(1, Ordering::SeqCst);
            });
        }

        sleep(Duration::from_millis(100)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(250)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending() {
        let ran = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        {
            let ran = Arc::clone(&ran);
            debouncer.schedule(async move {
                ran.store(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        sleep(Duration::from_millis(500)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }
}
