//! Scroll-driven rotation dynamics for the room.
//!
//! Wheel input moves a clamped target angle with cubic edge resistance; the
//! frame step eases the visible angle toward the target and relaxes the
//! target back to center. Both writers run on the same callback thread, so
//! the whole per-frame update happens atomically inside one call.

use crate::constants::{
    INITIAL_ROTATION_ANGLE, MAX_ROTATION_ANGLE, ROTATION_SMOOTHING, SCROLL_BASE_SPEED,
    TARGET_DECAY,
};

#[derive(Clone, Copy, Debug)]
pub struct RotationState {
    /// Angle applied to the rendered room, eased toward `target` each frame.
    pub current: f32,
    /// Angle the room is animating toward. Invariant: |target| <= MAX_ROTATION_ANGLE.
    pub target: f32,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            current: INITIAL_ROTATION_ANGLE,
            target: INITIAL_ROTATION_ANGLE,
        }
    }

    /// Apply one wheel event. Synchronous, no queueing; a zero delta is a no-op.
    pub fn apply_scroll(&mut self, delta_y: f64) {
        self.target = scrolled_target(self.target, delta_y);
    }

    /// One frame step: ease `current` toward `target`, then decay `target`
    /// toward zero. Ordering matters: the smoothing reads the target the
    /// scroll handlers last wrote, then the passive decay runs.
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * ROTATION_SMOOTHING;
        self.target *= TARGET_DECAY;
    }
}

/// Damping factor in [0, 1] that fades scroll influence to exactly zero as
/// the target reaches its limit.
#[inline]
pub fn resistance(target: f32) -> f32 {
    let proximity = (target.abs() / MAX_ROTATION_ANGLE).min(1.0);
    (1.0 - proximity.powi(3)).max(0.0)
}

#[inline]
pub fn scrolled_target(target: f32, delta_y: f64) -> f32 {
    let increment = delta_y as f32 * SCROLL_BASE_SPEED * resistance(target);
    (target + increment).clamp(-MAX_ROTATION_ANGLE, MAX_ROTATION_ANGLE)
}
