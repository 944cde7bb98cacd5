//! Immutable widget configuration.
//!
//! A single [`Config`] value is built once at bootstrap and each widget receives
//! a copy of its own section. Nothing mutates it afterwards.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("goblin.size must be in (0, 100], got {0}")]
    GoblinSize(f32),
    #[error("goblin.speed must be in (0, 1], got {0}")]
    GoblinSpeed(f32),
    #[error("cave.max_darkness must be in [0, 1), got {0}")]
    MaxDarkness(f32),
    #[error("cave.start_depth must be in [0, 1), got {0}")]
    StartDepth(f32),
    #[error("dodge.max_dodges must be in 1..=5, got {0}")]
    MaxDodges(u32),
    #[error("dodge.{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("counter.duration must be non-zero")]
    ZeroDuration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoblinConfig {
    pub size: f32,
    pub speed: f32,
    pub color: &'static str,
    pub eye_color: &'static str,
    pub pupil_color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaveConfig {
    pub max_darkness: f32,
    pub start_depth: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DodgeConfig {
    pub max_dodges: u32,
    pub dodge_distance: f32,
    pub trigger_distance: f32,
    pub jitter_span: f32,
    /// Half extents of the rectangle a link's offset is clamped to.
    pub bound_x: f32,
    pub bound_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterConfig {
    pub base_count: u64,
    pub daily_variance: u32,
    pub average_per_day: f64,
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub goblin: GoblinConfig,
    pub cave: CaveConfig,
    pub dodge: DodgeConfig,
    pub counter: CounterConfig,
}

impl Default for GoblinConfig {
    fn default() -> Self {
        Self {
            size: GOBLIN_SIZE,
            speed: GOBLIN_SPEED,
            color: GOBLIN_COLOR,
            eye_color: GOBLIN_EYE_COLOR,
            pupil_color: GOBLIN_PUPIL_COLOR,
        }
    }
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            max_darkness: CAVE_MAX_DARKNESS,
            start_depth: CAVE_START_DEPTH,
        }
    }
}

impl Default for DodgeConfig {
    fn default() -> Self {
        Self {
            max_dodges: DODGE_MAX_DODGES,
            dodge_distance: DODGE_DISTANCE,
            trigger_distance: DODGE_TRIGGER_DISTANCE,
            jitter_span: DODGE_JITTER_SPAN,
            bound_x: DODGE_BOUND_X,
            bound_y: DODGE_BOUND_Y,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            base_count: COUNTER_BASE,
            daily_variance: COUNTER_DAILY_VARIANCE,
            average_per_day: COUNTER_AVERAGE_PER_DAY,
            duration: Duration::from_millis(COUNTER_DURATION_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            goblin: GoblinConfig::default(),
            cave: CaveConfig::default(),
            dodge: DodgeConfig::default(),
            counter: CounterConfig::default(),
        }
    }
}

impl Config {
    /// Check the ranges every widget relies on.
    ///
    /// The accessibility floor lives here: `cave.max_darkness` must stay
    /// strictly below full opacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.goblin;
        if !(g.size > 0.0 && g.size <= 100.0) {
            return Err(ConfigError::GoblinSize(g.size));
        }
        if !(g.speed > 0.0 && g.speed <= 1.0) {
            return Err(ConfigError::GoblinSpeed(g.speed));
        }

        let c = &self.cave;
        if !(0.0..1.0).contains(&c.max_darkness) {
            return Err(ConfigError::MaxDarkness(c.max_darkness));
        }
        if !(0.0..1.0).contains(&c.start_depth) {
            return Err(ConfigError::StartDepth(c.start_depth));
        }

        let d = &self.dodge;
        if !(1..=5).contains(&d.max_dodges) {
            return Err(ConfigError::MaxDodges(d.max_dodges));
        }
        for (field, value) in [
            ("dodge_distance", d.dodge_distance),
            ("trigger_distance", d.trigger_distance),
            ("bound_x", d.bound_x),
            ("bound_y", d.bound_y),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.counter.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}
