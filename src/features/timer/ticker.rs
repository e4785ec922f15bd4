//! The periodic tick source.

use std::time::{Duration, Instant};

/// Period between two ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A repeating one-period tick source polled by the host loop.
///
/// The ticker is not a precise clock. When the host stalls for longer than
/// a period it fires once and re-arms from the poll instant instead of
/// replaying the missed ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Arm a ticker whose first tick is due one period after `now`.
    #[must_use]
    pub fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Returns true if a tick is due at `now`, consuming it.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }

    /// When the next tick is due.
    #[must_use]
    pub const fn next_due(&self) -> Instant {
        self.next_due
    }

    /// The tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }
}
