//! Creature expression math and the blink state machine.
//!
//! Everything here is a pure function of injected pointer/viewport state (or
//! of an injected RNG for blinking), so the DOM view stays a thin shell and
//! the behavior is testable on the host.

use crate::constants::{
    BLINK_DELAY_MAX_MS, BLINK_DELAY_MIN_MS, BLINK_DURATION_MS, BODY_SCALE_GAIN,
    DOUBLE_BLINK_GAP_MS, DOUBLE_BLINK_PROBABILITY, LOOK_DISTANCE, MOUTH_BASE_Y,
    MOUTH_SMILE_AMPLITUDE,
};
use glam::Vec2;
use rand::Rng;

/// Derived creature state. `eye_offset` is `None` until the pointer has been
/// seen at least once; its magnitude is always `LOOK_DISTANCE`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expression {
    pub happiness: f32,
    pub eye_offset: Option<Vec2>,
}

impl Expression {
    pub const NEUTRAL: Expression = Expression {
        happiness: 0.0,
        eye_offset: None,
    };
}

/// Compute happiness and eye tracking from the pointer position relative to
/// the viewport center. Quadratic falloff: full happiness at dead center,
/// zero at (and beyond) the viewport corner.
pub fn expression(pointer: Option<Vec2>, viewport: Vec2) -> Expression {
    let pointer = match pointer {
        Some(p) => p,
        None => return Expression::NEUTRAL,
    };
    let center = Vec2::new(viewport.x.max(1.0), viewport.y.max(1.0)) * 0.5;
    let to_pointer = pointer - center;
    let distance = to_pointer.length();
    let max_distance = center.length();

    let closeness = 1.0 - (distance / max_distance).min(1.0);
    let happiness = closeness * closeness;

    let angle = to_pointer.y.atan2(to_pointer.x);
    let eye_offset = Vec2::new(angle.cos(), angle.sin()) * LOOK_DISTANCE;

    Expression {
        happiness,
        eye_offset: Some(eye_offset),
    }
}

/// Vertical control point of the mouth curve: flat line at zero happiness,
/// pronounced smile at one.
#[inline]
pub fn mouth_control_y(happiness: f32) -> f32 {
    MOUTH_BASE_Y + happiness * MOUTH_SMILE_AMPLITUDE
}

/// Quadratic path for the mouth in creature viewbox coordinates.
pub fn mouth_path(happiness: f32) -> String {
    format!("M 40,68 Q 52,{:.2} 64,68", mouth_control_y(happiness))
}

#[inline]
pub fn body_scale(happiness: f32) -> f32 {
    1.0 + happiness * BODY_SCALE_GAIN
}

// ---------------- Blink state machine ----------------

/// Phases of the blink cycle. `Closed { second: true }` is the second blink
/// of a double-blink and never branches into a third.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlinkPhase {
    Open,
    Closed { second: bool },
    BetweenDoubleBlink,
}

/// Outcome of one machine step: whether the eyes are closed now, and how
/// long until the next transition fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkStep {
    pub eyes_closed: bool,
    pub next_delay_ms: u32,
}

/// Self-scheduling blink cycle. The driver owns a single pending timer and
/// calls `advance` each time it fires; the returned delay is the timer's
/// next duration. All randomness comes through the injected RNG.
#[derive(Debug)]
pub struct BlinkMachine {
    phase: BlinkPhase,
}

impl Default for BlinkMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl BlinkMachine {
    pub fn new() -> Self {
        Self {
            phase: BlinkPhase::Open,
        }
    }

    pub fn eyes_closed(&self) -> bool {
        matches!(self.phase, BlinkPhase::Closed { .. })
    }

    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> BlinkStep {
        match self.phase {
            BlinkPhase::Open | BlinkPhase::BetweenDoubleBlink => {
                let second = self.phase == BlinkPhase::BetweenDoubleBlink;
                self.phase = BlinkPhase::Closed { second };
                BlinkStep {
                    eyes_closed: true,
                    next_delay_ms: BLINK_DURATION_MS,
                }
            }
            BlinkPhase::Closed { second: false }
                if rng.gen::<f32>() < DOUBLE_BLINK_PROBABILITY =>
            {
                self.phase = BlinkPhase::BetweenDoubleBlink;
                BlinkStep {
                    eyes_closed: false,
                    next_delay_ms: DOUBLE_BLINK_GAP_MS,
                }
            }
            BlinkPhase::Closed { .. } => {
                self.phase = BlinkPhase::Open;
                BlinkStep {
                    eyes_closed: false,
                    next_delay_ms: next_blink_delay_ms(rng),
                }
            }
        }
    }
}

/// Uniform delay until the next blink, in [BLINK_DELAY_MIN_MS, BLINK_DELAY_MAX_MS).
#[inline]
pub fn next_blink_delay_ms<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(BLINK_DELAY_MIN_MS..BLINK_DELAY_MAX_MS)
}
