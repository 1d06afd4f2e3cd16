//! Fixed-rate logic clock, decoupled from the render rate
//!
//! The clock only tracks the deadline of the next logic tick. A late frame
//! fires a single tick and pushes the deadline forward by one interval, so the
//! logic rate stays bounded and a backlog is worked off one tick per frame.

use crate::error::ConfigError;

/// Milliseconds since an arbitrary monotonic epoch
pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    next_deadline: Millis,
    interval: Millis,
}

impl SimulationClock {
    /// First tick becomes due at `first_deadline`
    pub fn new(first_deadline: Millis, tick_interval_ms: Millis) -> Result<Self, ConfigError> {
        if tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(Self {
            next_deadline: first_deadline,
            interval: tick_interval_ms,
        })
    }

    #[inline]
    pub fn next_deadline(&self) -> Millis {
        self.next_deadline
    }

    #[inline]
    pub fn interval(&self) -> Millis {
        self.interval
    }

    /// True when a logic tick is due
    #[inline]
    pub fn should_tick(&self, now: Millis) -> bool {
        now >= self.next_deadline
    }

    /// Move the deadline forward by exactly one interval
    #[inline]
    pub fn advance(&mut self) {
        self.next_deadline += self.interval;
    }

    /// Check and advance in one call; returns whether a tick fired
    pub fn poll(&mut self, now: Millis) -> bool {
        if self.should_tick(now) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Nominal time of the most recently fired tick
    pub fn last_tick_time(&self) -> Millis {
        self.next_deadline.saturating_sub(self.interval)
    }

    /// Progress from the last tick toward the next one, clamped to [0, 1]
    pub fn interpolation(&self, now: Millis) -> f32 {
        let elapsed = now.saturating_sub(self.last_tick_time());
        (elapsed as f64 / self.interval as f64).clamp(0.0, 1.0) as f32
    }

    /// Ticks the logic is behind wall time (0 when on schedule)
    pub fn backlog(&self, now: Millis) -> u64 {
        if now < self.next_deadline {
            0
        } else {
            (now - self.next_deadline) / self.interval + 1
        }
    }
}
