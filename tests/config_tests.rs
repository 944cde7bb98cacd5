// Host-side tests for config validation.

use goblin_core::{Config, ConfigError};
use std::time::Duration;

#[test]
fn default_config_is_valid() {
    assert_eq!(Config::default().validate(), Ok(()));
}

#[test]
fn default_config_matches_page_values() {
    let cfg = Config::default();
    assert_eq!(cfg.goblin.size, 30.0);
    assert_eq!(cfg.goblin.speed, 0.08);
    assert_eq!(cfg.goblin.color, "#2ecc71");
    assert_eq!(cfg.cave.max_darkness, 0.7);
    assert_eq!(cfg.cave.start_depth, 0.2);
    assert_eq!(cfg.dodge.max_dodges, 3);
    assert_eq!(cfg.dodge.dodge_distance, 60.0);
    assert_eq!(cfg.dodge.trigger_distance, 80.0);
    assert_eq!(cfg.counter.base_count, 42_069);
    assert_eq!(cfg.counter.daily_variance, 100);
    assert_eq!(cfg.counter.duration, Duration::from_millis(2000));
}

#[test]
fn fully_opaque_cave_is_rejected() {
    let mut cfg = Config::default();
    cfg.cave.max_darkness = 1.0;
    assert_eq!(cfg.validate(), Err(ConfigError::MaxDarkness(1.0)));

    cfg.cave.max_darkness = -0.1;
    assert!(matches!(cfg.validate(), Err(ConfigError::MaxDarkness(_))));
}

#[test]
fn goblin_ranges_are_checked() {
    let mut cfg = Config::default();
    cfg.goblin.size = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::GoblinSize(0.0)));

    let mut cfg = Config::default();
    cfg.goblin.speed = 1.5;
    assert_eq!(cfg.validate(), Err(ConfigError::GoblinSpeed(1.5)));

    let mut cfg = Config::default();
    cfg.goblin.speed = f32::NAN;
    assert!(matches!(cfg.validate(), Err(ConfigError::GoblinSpeed(_))));
}

#[test]
fn dodge_ranges_are_checked() {
    let mut cfg = Config::default();
    cfg.dodge.max_dodges = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::MaxDodges(0)));

    cfg.dodge.max_dodges = 6;
    assert_eq!(cfg.validate(), Err(ConfigError::MaxDodges(6)));

    let mut cfg = Config::default();
    cfg.dodge.bound_y = 0.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonPositive {
            field: "bound_y",
            value: 0.0
        })
    );
}

#[test]
fn zero_count_up_duration_is_rejected() {
    let mut cfg = Config::default();
    cfg.counter.duration = Duration::ZERO;
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroDuration));
}

#[test]
fn errors_name_the_field() {
    let msg = ConfigError::MaxDarkness(1.0).to_string();
    assert!(msg.contains("cave.max_darkness"), "{msg}");
    let msg = ConfigError::NonPositive {
        field: "dodge_distance",
        value: -1.0,
    }
    .to_string();
    assert!(msg.contains("dodge.dodge_distance"), "{msg}");
}
