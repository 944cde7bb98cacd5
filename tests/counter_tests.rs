// Host-side tests for the visitor counter and its pseudo-random daily bonus.

use goblin_core::{
    days_since_epoch, ease_out_cubic, format_grouped, seeded_random, visitor_total, CountUp,
    CounterConfig, FrameStep,
};
use std::time::Duration;

#[test]
fn seeded_random_is_in_unit_interval() {
    for i in -5_000..5_000 {
        let r = seeded_random(i as f64);
        assert!((0.0..1.0).contains(&r), "seed {i} gave {r}");
    }
    for seed in [0.5, 1e9, -1e9, 12345.678] {
        let r = seeded_random(seed);
        assert!((0.0..1.0).contains(&r), "seed {seed} gave {r}");
    }
}

#[test]
fn seeded_random_is_repeatable() {
    for seed in [0.0, 1.0, 12345.0, 19000.0] {
        assert_eq!(seeded_random(seed), seeded_random(seed));
    }
    assert_ne!(seeded_random(1.0), seeded_random(2.0));
}

#[test]
fn seeded_random_degenerate_inputs() {
    assert_eq!(seeded_random(0.0), 0.0);
    assert_eq!(seeded_random(f64::NAN), 0.0);
    assert_eq!(seeded_random(f64::INFINITY), 0.0);
}

#[test]
fn worked_example_matches() {
    let cfg = CounterConfig::default();
    let expected = 42_069 + 138_700 + (seeded_random(19_000.0) * 100.0).floor() as u64;
    assert_eq!(visitor_total(19_000, &cfg), expected);
    assert!((180_769..180_869).contains(&expected));
}

#[test]
fn total_is_a_function_of_the_day() {
    let cfg = CounterConfig::default();
    // 2023-11-14 00:00 UTC is day 19675
    let midnight = 19_675.0 * 86_400_000.0;
    let morning = days_since_epoch(midnight + 3_600_000.0);
    let evening = days_since_epoch(midnight + 3_600_000.0 * 23.0);
    assert_eq!(morning, 19_675);
    assert_eq!(morning, evening);
    assert_eq!(visitor_total(morning, &cfg), visitor_total(evening, &cfg));
}

#[test]
fn total_grows_across_days() {
    let cfg = CounterConfig::default();
    // the trend (7.3/day) beats the daily variance over a few weeks
    assert!(visitor_total(20_030, &cfg) > visitor_total(20_000, &cfg));
}

#[test]
fn days_since_epoch_floors() {
    assert_eq!(days_since_epoch(0.0), 0);
    assert_eq!(days_since_epoch(86_399_999.0), 0);
    assert_eq!(days_since_epoch(86_400_000.0), 1);
    assert_eq!(days_since_epoch(-1.0), -1);
}

#[test]
fn before_epoch_the_trend_term_is_zero() {
    let cfg = CounterConfig::default();
    let total = visitor_total(-10, &cfg);
    assert!(total >= cfg.base_count);
    assert!(total < cfg.base_count + u64::from(cfg.daily_variance));
}

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    // ease-out: ahead of linear everywhere in between
    for i in 1..100 {
        let p = i as f64 / 100.0;
        assert!(ease_out_cubic(p) > p);
    }
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn count_up_starts_at_zero_and_lands_on_target() {
    let c = CountUp::new(180_000, Duration::from_millis(2000));
    assert_eq!(c.value_at(Duration::ZERO), (0, FrameStep::Continue));

    let (mid, step) = c.value_at(Duration::from_millis(1000));
    assert_eq!(step, FrameStep::Continue);
    assert_eq!(mid, 157_500); // 180000 * 0.875

    assert_eq!(
        c.value_at(Duration::from_millis(2000)),
        (180_000, FrameStep::Done)
    );
    assert_eq!(
        c.value_at(Duration::from_secs(60)),
        (180_000, FrameStep::Done)
    );
}

#[test]
fn count_up_never_decreases() {
    let c = CountUp::new(99_999, Duration::from_millis(2000));
    let mut prev = 0;
    for ms in (0..=2100).step_by(16) {
        let (v, _) = c.value_at(Duration::from_millis(ms));
        assert!(v >= prev);
        assert!(v <= c.target());
        prev = v;
    }
}

#[test]
fn format_grouped_inserts_thousands_separators() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(1_000), "1,000");
    assert_eq!(format_grouped(180_809), "180,809");
    assert_eq!(format_grouped(1_234_567), "1,234,567");
}
