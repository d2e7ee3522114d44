// Host-side tests for creature expression math and the blink machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/expression.rs"]
mod expression;

use constants::*;
use expression::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn unknown_pointer_means_neutral_expression() {
    let expr = expression(None, VIEWPORT);
    assert_eq!(expr.happiness, 0.0);
    assert!(expr.eye_offset.is_none());
}

#[test]
fn happiness_peaks_at_center_and_dies_at_corners() {
    let center = expression(Some(Vec2::new(400.0, 300.0)), VIEWPORT);
    assert!((center.happiness - 1.0).abs() < 1e-6);

    for corner in [
        Vec2::new(0.0, 0.0),
        Vec2::new(800.0, 0.0),
        Vec2::new(0.0, 600.0),
        Vec2::new(800.0, 600.0),
    ] {
        let expr = expression(Some(corner), VIEWPORT);
        assert!(expr.happiness.abs() < 1e-6, "corner {:?} -> {}", corner, expr.happiness);
    }
}

#[test]
fn happiness_saturates_at_zero_beyond_the_diagonal() {
    let expr = expression(Some(Vec2::new(-500.0, -500.0)), VIEWPORT);
    assert_eq!(expr.happiness, 0.0);
}

#[test]
fn happiness_follows_the_quadratic_falloff() {
    // pointer (500, 500) in 800x600: distance sqrt(100^2 + 200^2) against
    // a 500 max gives (1 - 0.4472)^2
    let expr = expression(Some(Vec2::new(500.0, 500.0)), VIEWPORT);
    let distance = (100.0_f32 * 100.0 + 200.0 * 200.0).sqrt();
    let expected = (1.0 - distance / 500.0).powi(2);
    assert!((expr.happiness - expected).abs() < 1e-5);
    assert!((expr.happiness - 0.3056).abs() < 1e-3);
}

#[test]
fn happiness_decreases_monotonically_from_the_center() {
    let mut previous = f32::INFINITY;
    for i in 0..=50 {
        let t = i as f32 / 50.0;
        let pointer = Vec2::new(400.0, 300.0) + Vec2::new(400.0, 300.0) * t;
        let h = expression(Some(pointer), VIEWPORT).happiness;
        assert!(h <= previous + 1e-6, "happiness rose moving outward at t={}", t);
        previous = h;
    }
}

#[test]
fn eye_offset_has_constant_magnitude_toward_the_pointer() {
    for pointer in [
        Vec2::new(0.0, 0.0),
        Vec2::new(799.0, 1.0),
        Vec2::new(401.0, 300.0),
        Vec2::new(400.0, 599.0),
        Vec2::new(123.0, 456.0),
    ] {
        let offset = expression(Some(pointer), VIEWPORT)
            .eye_offset
            .expect("pointer is known");
        assert!((offset.length() - LOOK_DISTANCE).abs() < 1e-4);
        let expected_angle = (pointer.y - 300.0).atan2(pointer.x - 400.0);
        let got_angle = offset.y.atan2(offset.x);
        assert!(
            (expected_angle - got_angle).abs() < 1e-4,
            "direction mismatch for {:?}",
            pointer
        );
    }
}

#[test]
fn mouth_goes_from_flat_line_to_smile() {
    assert_eq!(mouth_control_y(0.0), MOUTH_BASE_Y);
    assert_eq!(mouth_control_y(1.0), MOUTH_BASE_Y + MOUTH_SMILE_AMPLITUDE);
    assert!(mouth_path(0.0).contains("Q 52,68.00"));
    assert!(mouth_path(1.0).contains("Q 52,80.00"));
}

#[test]
fn body_scale_grows_with_happiness() {
    assert_eq!(body_scale(0.0), 1.0);
    assert!((body_scale(1.0) - (1.0 + BODY_SCALE_GAIN)).abs() < 1e-6);
}

// ---------------- Blink machine ----------------

#[test]
fn first_advance_closes_the_eyes_for_the_blink_duration() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut machine = BlinkMachine::new();
    assert!(!machine.eyes_closed());
    let step = machine.advance(&mut rng);
    assert!(step.eyes_closed);
    assert!(machine.eyes_closed());
    assert_eq!(step.next_delay_ms, BLINK_DURATION_MS);
}

#[test]
fn blink_cycle_invariants_hold_over_many_cycles() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut machine = BlinkMachine::new();
    let mut doubles = 0u32;
    let mut cycles = 0u32;

    for _ in 0..4000 {
        let step = machine.advance(&mut rng);
        if step.eyes_closed {
            // every close lasts exactly the blink duration
            assert_eq!(step.next_delay_ms, BLINK_DURATION_MS);
        } else if step.next_delay_ms == DOUBLE_BLINK_GAP_MS {
            doubles += 1;
            // the queued second blink must fire next and never branch again
            let second = machine.advance(&mut rng);
            assert!(second.eyes_closed);
            assert_eq!(second.next_delay_ms, BLINK_DURATION_MS);
            let reopen = machine.advance(&mut rng);
            assert!(!reopen.eyes_closed);
            assert!(reopen.next_delay_ms >= BLINK_DELAY_MIN_MS);
            assert!(reopen.next_delay_ms < BLINK_DELAY_MAX_MS);
        } else {
            cycles += 1;
            assert!(step.next_delay_ms >= BLINK_DELAY_MIN_MS);
            assert!(step.next_delay_ms < BLINK_DELAY_MAX_MS);
        }
    }

    // double blinks happen at roughly the configured probability
    let total = (doubles + cycles) as f32;
    let ratio = doubles as f32 / total;
    assert!(
        (ratio - DOUBLE_BLINK_PROBABILITY).abs() < 0.08,
        "double-blink ratio drifted: {}",
        ratio
    );
}

#[test]
fn next_delay_sampling_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let d = next_blink_delay_ms(&mut rng);
        assert!((BLINK_DELAY_MIN_MS..BLINK_DELAY_MAX_MS).contains(&d));
    }
}
