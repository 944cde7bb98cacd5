//! The "fake but convincing" visitor counter.
//!
//! The total is a pure function of the calendar day: a base, plus a steady
//! trickle per day since the Unix epoch, plus a daily bonus from
//! [`seeded_random`]. Reloading on the same day shows the same number.

use crate::config::CounterConfig;
use crate::constants::MS_PER_DAY;
use crate::random::seeded_random;
use crate::schedule::FrameStep;
use std::time::Duration;

/// Whole days since 1970-01-01 UTC for a millisecond timestamp.
pub fn days_since_epoch(unix_ms: f64) -> i64 {
    (unix_ms / MS_PER_DAY).floor() as i64
}

pub fn visitor_total(days: i64, cfg: &CounterConfig) -> u64 {
    let additional = (days as f64 * cfg.average_per_day).floor().max(0.0) as u64;
    let today = (seeded_random(days as f64) * f64::from(cfg.daily_variance)).floor() as u64;
    cfg.base_count + additional + today
}

/// Cubic ease-out: fast start, gentle landing.
#[inline]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// One-shot count from zero up to `target` over `duration`.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    target: u64,
    duration: Duration,
}

impl CountUp {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Value to display after `elapsed`, and whether another frame is needed.
    pub fn value_at(&self, elapsed: Duration) -> (u64, FrameStep) {
        let progress = self.progress(elapsed);
        let value = (self.target as f64 * ease_out_cubic(progress)).floor() as u64;
        let step = if progress < 1.0 {
            FrameStep::Continue
        } else {
            FrameStep::Done
        };
        (value.min(self.target), step)
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
