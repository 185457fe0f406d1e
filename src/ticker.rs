use std::time::{Duration, Instant};

/// Fixed-interval tick schedule owned by the game loop.
///
/// The ticker never sleeps or spawns anything; the loop polls it with the
/// current time and runs one engine tick whenever it reports a tick as due.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Creates a stopped ticker.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedules the first tick one interval after `now`. No-op when running.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Cancels the pending tick.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Discards any pending tick and schedules a fresh one from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Returns true when a tick is due at `now`, scheduling the next one.
    ///
    /// Missed intervals are not replayed: at most one tick fires per poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` while stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
