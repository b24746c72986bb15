use std::time::{Duration, Instant};

/// Redraw / input poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown tick period in milliseconds
pub const COUNTDOWN_TICK_MS: u64 = 1000;

/// Get the redraw interval
pub fn ui_refresh_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Cancellable fixed-period schedule.
///
/// Only fires while armed. Disarming drops the pending deadline, so nothing
/// scheduled before a disarm can be delivered afterwards.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// One-second countdown ticker
    pub fn countdown() -> Self {
        Self::new(Duration::from_millis(COUNTDOWN_TICK_MS))
    }

    /// Schedule the first fire one period from `now`. No-op if already armed.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of whole periods elapsed by `now`; advances the schedule past them
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while let Some(deadline) = self.next_due {
            if deadline > now {
                break;
            }
            fired += 1;
            self.next_due = Some(deadline + self.period);
        }
        fired
    }

    /// Time left before the next fire, if armed
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
