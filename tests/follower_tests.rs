// Host-side tests for the cursor-following goblin's motion.

use glam::Vec2;
use goblin_core::{pupil_offset, PointerState};
use std::f32::consts::{FRAC_PI_2, PI};

#[test]
fn starts_centered_and_at_rest() {
    let st = PointerState::centered(800.0, 600.0);
    assert_eq!(st.current, Vec2::new(400.0, 300.0));
    assert_eq!(st.target, st.current);
    assert_eq!(st.heading, 0.0);
}

#[test]
fn step_closes_a_fixed_fraction_of_the_gap() {
    let mut st = PointerState::new(Vec2::ZERO);
    st.set_target(Vec2::new(100.0, 0.0));
    st.step(0.08);
    assert!((st.current.x - 8.0).abs() < 1e-5);
    st.step(0.08);
    // 8 + 0.08 * 92
    assert!((st.current.x - 15.36).abs() < 1e-4);
}

#[test]
fn heading_points_at_target() {
    let mut st = PointerState::new(Vec2::ZERO);
    st.set_target(Vec2::new(0.0, 50.0));
    assert!((st.step(0.1) - FRAC_PI_2).abs() < 1e-6);
    st.set_target(Vec2::new(-100.0, st.current.y));
    assert!((st.step(0.1).abs() - PI).abs() < 1e-6);
}

#[test]
fn converges_without_overshoot() {
    let mut st = PointerState::new(Vec2::new(10.0, 10.0));
    st.set_target(Vec2::new(300.0, -200.0));
    let mut prev = st.remaining();
    for _ in 0..300 {
        st.step(0.08);
        let r = st.remaining();
        assert!(r <= prev);
        prev = r;
    }
    assert!(prev < 0.1, "still {prev}px away");
}

#[test]
fn non_finite_targets_are_ignored() {
    let mut st = PointerState::new(Vec2::ZERO);
    st.set_target(Vec2::new(f32::NAN, 3.0));
    assert_eq!(st.target, Vec2::ZERO);
}

#[test]
fn pupils_shift_three_pixels_toward_heading() {
    let right = pupil_offset(0.0);
    assert!((right - Vec2::new(3.0, 0.0)).length() < 1e-6);
    let down = pupil_offset(FRAC_PI_2);
    assert!((down - Vec2::new(0.0, 3.0)).length() < 1e-5);
    for i in 0..32 {
        let off = pupil_offset(i as f32 * 0.2);
        assert!((off.length() - 3.0).abs() < 1e-5);
    }
}
