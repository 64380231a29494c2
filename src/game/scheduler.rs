//! Tick scheduling
//!
//! The controller only starts and stops its scheduler. Who actually waits for
//! the next tick is up to the host: the terminal mode awaits an
//! [`IntervalScheduler`], tests call `tick()` by hand next to a
//! [`ManualScheduler`].

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Starts and stops the periodic tick
pub trait Scheduler {
    /// Start ticking every `period`, replacing any schedule already running
    fn start(&mut self, period: Duration);

    /// Stop ticking
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Scheduler that only records what it was asked to do
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualScheduler {
    pub period: Option<Duration>,
    pub starts: u32,
    pub stops: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.period = None;
        self.stops += 1;
    }

    fn is_running(&self) -> bool {
        self.period.is_some()
    }
}

/// Scheduler backed by a tokio interval
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    interval: Option<Interval>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the next tick. Never resolves while stopped.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, period: Duration) {
        // First tick one full period from now, not immediately.
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn stop(&mut self) {
        self.interval = None;
    }

    fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_records_calls() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.is_running());

        scheduler.start(Duration::from_millis(150));
        assert!(scheduler.is_running());
        assert_eq!(scheduler.period, Some(Duration::from_millis(150)));

        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!((scheduler.starts, scheduler.stops), (1, 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticks_after_one_period() {
        let mut scheduler = IntervalScheduler::new();
        scheduler.start(Duration::from_millis(150));

        let started = Instant::now();
        scheduler.tick().await;
        assert_eq!(started.elapsed(), Duration::from_millis(150));

        scheduler.tick().await;
        assert_eq!(started.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_interval() {
        let mut scheduler = IntervalScheduler::new();
        scheduler.start(Duration::from_millis(150));
        tokio::time::advance(Duration::from_millis(100)).await;

        // Restarting pushes the next tick a full period out again.
        scheduler.start(Duration::from_millis(150));
        let restarted = Instant::now();
        scheduler.tick().await;
        assert_eq!(restarted.elapsed(), Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_scheduler_never_ticks() {
        let mut scheduler = IntervalScheduler::new();
        scheduler.start(Duration::from_millis(10));
        scheduler.stop();
        assert!(!scheduler.is_running());

        let waited = tokio::time::timeout(Duration::from_secs(5), scheduler.tick()).await;
        assert!(waited.is_err());
    }
}
