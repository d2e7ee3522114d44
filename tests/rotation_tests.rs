// Host-side tests for the scroll-driven rotation dynamics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/rotation.rs"]
mod rotation;

use constants::*;
use rotation::*;

#[test]
fn target_stays_clamped_for_arbitrary_delta_sequences() {
    let deltas: [f64; 12] = [
        120.0, 5000.0, -300.0, 99999.0, -99999.0, 1.0, -1.0, 250000.0, 250000.0, -0.5, 3.0,
        -1000000.0,
    ];
    let mut state = RotationState::new();
    for (i, d) in deltas.iter().cycle().take(500).enumerate() {
        state.apply_scroll(*d);
        assert!(
            state.target.abs() <= MAX_ROTATION_ANGLE + 1e-6,
            "target escaped clamp at step {}: {}",
            i,
            state.target
        );
    }
}

#[test]
fn resistance_is_monotone_and_vanishes_at_the_limit() {
    let mut previous = f32::INFINITY;
    for i in 0..=100 {
        let angle = MAX_ROTATION_ANGLE * i as f32 / 100.0;
        let r = resistance(angle);
        assert!((0.0..=1.0).contains(&r));
        assert!(r <= previous, "resistance rose between samples near {}", angle);
        previous = r;
    }
    assert_eq!(resistance(MAX_ROTATION_ANGLE), 0.0);
    assert_eq!(resistance(-MAX_ROTATION_ANGLE), 0.0);
    assert_eq!(resistance(0.0), 1.0);
}

#[test]
fn scroll_at_the_limit_is_a_dead_stop() {
    let mut state = RotationState::new();
    state.target = MAX_ROTATION_ANGLE;
    state.apply_scroll(4000.0);
    assert_eq!(state.target, MAX_ROTATION_ANGLE);
    state.target = -MAX_ROTATION_ANGLE;
    state.apply_scroll(-4000.0);
    assert_eq!(state.target, -MAX_ROTATION_ANGLE);
}

#[test]
fn zero_delta_is_a_no_op() {
    let mut state = RotationState::new();
    state.target = 0.5;
    let before = state.target;
    state.apply_scroll(0.0);
    assert_eq!(state.target, before);
}

#[test]
fn unit_scroll_from_rest_matches_base_speed() {
    // delta +1000 at target 0: full resistance, increment 1000 * 0.00025
    let new_target = scrolled_target(0.0, 1000.0);
    assert!((new_target - 0.25).abs() < 1e-6, "got {}", new_target);
}

#[test]
fn target_decays_and_current_chases_it() {
    let mut state = RotationState::new();
    state.target = 0.9; // near the clamp
    state.current = 0.0;
    for _ in 0..300 {
        let target_before = state.target.abs();
        let gap_before = (state.current - state.target).abs();
        state.step();
        assert!(state.target.abs() <= target_before, "target grew without input");
        assert!(
            (state.current - state.target).abs() <= gap_before + 1e-6,
            "current moved away from target"
        );
    }
    // long decay settles the pair near zero
    assert!(state.target.abs() < 1e-2);
    assert!(state.current.abs() < 1e-1);
}

#[test]
fn initial_pose_is_angled_and_within_the_clamp() {
    let state = RotationState::new();
    assert_eq!(state.current, INITIAL_ROTATION_ANGLE);
    assert_eq!(state.target, INITIAL_ROTATION_ANGLE);
    assert!(state.target.abs() < MAX_ROTATION_ANGLE);
}

#[test]
fn resistance_keeps_progress_slowing_toward_the_edge() {
    // equal deltas produce shrinking increments as the target climbs
    let mut state = RotationState::new();
    state.target = 0.0;
    let mut last_increment = f32::INFINITY;
    for _ in 0..40 {
        let before = state.target;
        state.apply_scroll(2000.0);
        let increment = state.target - before;
        assert!(increment >= 0.0);
        assert!(increment <= last_increment + 1e-6);
        last_increment = increment;
    }
}
