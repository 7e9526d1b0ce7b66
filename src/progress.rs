use std::time::{Duration, Instant};
use tracing::info;

/// Observer for the corpus scan. Purely informational.
pub trait ProgressSink {
    fn report(&mut self, done: usize, total: usize);
}

/// Discards every notification.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _done: usize, _total: usize) {}
}

/// Logs the completed fraction, at most once per interval.
pub struct TimedProgress {
    interval: Duration,
    next_message: Instant,
}

impl TimedProgress {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_message: Instant::now() + interval,
        }
    }
}

impl Default for TimedProgress {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl ProgressSink for TimedProgress {
    fn report(&mut self, done: usize, total: usize) {
        let now = Instant::now();
        if now < self.next_message || total == 0 {
            return;
        }
        info!("Analyzing {:.1}%", 100.0 * done as f64 / total as f64);
        self.next_message = now + self.interval;
    }
}
