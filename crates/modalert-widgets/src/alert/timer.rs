#![forbid(unsafe_code)]

//! Countdown and one-shot deadline driven by host ticks.
//!
//! Both timers advance against explicit timestamps: a late tick catches up
//! on every second it missed, and expiry is reported exactly once.

use web_time::{Duration, Instant};

const SECOND: Duration = Duration::from_secs(1);

/// What a call to [`Countdown::advance`] observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownStep {
    /// Seconds that elapsed during this call.
    pub ticks: u32,
    /// The countdown reached zero during this call.
    pub expired: bool,
}

/// Visible seconds-remaining counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    next_tick: Instant,
    expired: bool,
}

impl Countdown {
    /// Start counting down from `seconds` at `now`.
    #[must_use]
    pub fn start(seconds: u32, now: Instant) -> Self {
        Self {
            remaining: seconds,
            next_tick: now + SECOND,
            expired: false,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Label text for the current count.
    #[must_use]
    pub fn label(&self) -> String {
        self.remaining.to_string()
    }

    /// Advance to `now`.
    ///
    /// A countdown started at zero expires on its first advance.
    pub fn advance(&mut self, now: Instant) -> CountdownStep {
        let mut step = CountdownStep::default();
        if self.expired {
            return step;
        }
        while self.remaining > 0 && now >= self.next_tick {
            self.remaining -= 1;
            self.next_tick += SECOND;
            step.ticks += 1;
        }
        if self.remaining == 0 {
            self.expired = true;
            step.expired = true;
        }
        step
    }
}

/// A one-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
    fired: bool,
}

impl Deadline {
    #[must_use]
    pub fn at(at: Instant) -> Self {
        Self { at, fired: false }
    }

    #[must_use]
    pub fn when(&self) -> Instant {
        self.at
    }

    /// Returns `true` the first time `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.fired || now < self.at {
            return false;
        }
        self.fired = true;
        true
    }
}
