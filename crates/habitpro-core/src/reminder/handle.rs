//! Background reminder loop with an explicit stop handle.

use chrono::NaiveDate;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::{Notifier, ReminderScheduler};
use crate::habit::Habit;

/// Handle to a running reminder loop.
///
/// The loop sweeps once per period, first one period after spawning. It
/// runs until [`ReminderHandle::stop`] is awaited or the handle is dropped.
#[derive(Debug)]
pub struct ReminderHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<u64>>,
}

impl ReminderHandle {
    /// Shortest period the loop will run at.
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);
    /// Longest period the loop will run at.
    pub const MAX_PERIOD: Duration = Duration::from_secs(365 * 24 * 60 * 60);

    /// Spawn the loop on the current tokio runtime.
    ///
    /// `source` is asked for the current list and today's date on each
    /// sweep, so the loop always sees the latest persisted state. `period`
    /// is clamped to `MIN_PERIOD..=MAX_PERIOD`.
    pub fn spawn<N, S>(scheduler: ReminderScheduler<N>, period: Duration, mut source: S) -> Self
    where
        N: Notifier + 'static,
        S: FnMut() -> (Vec<Habit>, NaiveDate) + Send + 'static,
    {
        let period = period.clamp(Self::MIN_PERIOD, Self::MAX_PERIOD);
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut ticks = 0u64;
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        let (habits, today) = source();
                        scheduler.tick(&habits, today);
                        ticks += 1;
                    }
                }
            }
            tracing::debug!(ticks, "reminder loop stopped");
            ticks
        });

        Self {
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the loop and wait for it. Returns how many sweeps ran.
    pub async fn stop(mut self) -> u64 {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        match self.task.take() {
            Some(task) => task.await.unwrap_or(0),
            None => 0,
        }
    }
}

impl Drop for ReminderHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
