// Tuning constants for the landing scene. Behavioral values are plain
// consts so they can be adjusted without touching the modules that use them.

use std::f32::consts::PI;

// Room rotation dynamics
pub const MAX_ROTATION_ANGLE: f32 = PI / 3.0; // hard clamp for the target angle
pub const INITIAL_ROTATION_ANGLE: f32 = PI / 4.0; // walls visibly angled at rest
pub const SCROLL_BASE_SPEED: f32 = 0.00025; // radians per wheel delta unit
pub const ROTATION_SMOOTHING: f32 = 0.08; // per-frame blend of current toward target
pub const TARGET_DECAY: f32 = 0.98; // per-frame spring back to center

// Camera
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Room geometry
pub const FLAT_ROOM_SIZE: f32 = 4.0; // edge of the open four-wall room
pub const FLAT_TEXTURE_REPEAT: f32 = 1.0;
pub const ROUNDED_ROOM_SIZE: f32 = 5.0; // edge of the rounded cube
pub const ROUNDED_CORNER_RADIUS: f32 = 1.0;
pub const ROUNDED_SEGMENTS: u32 = 8; // corner smoothing subdivisions
pub const ROUNDED_TEXTURE_REPEAT: f32 = 2.0;

// Procedural wall pattern
pub const PATTERN_SIZE: u32 = 1024; // square texture resolution
pub const PATTERN_GRID: u32 = 8; // tiles per side
pub const CIRCLE_RADIUS_LARGE: f32 = 0.42; // fraction of tile size, even rows
pub const CIRCLE_RADIUS_SMALL: f32 = 0.25; // odd rows

// Creature expression
pub const LOOK_DISTANCE: f32 = 3.0; // max eye offset in viewbox pixels
pub const MOUTH_BASE_Y: f32 = 68.0;
pub const MOUTH_SMILE_AMPLITUDE: f32 = 12.0;
pub const BODY_SCALE_GAIN: f32 = 0.05;

// Blink scheduling (milliseconds)
pub const BLINK_DURATION_MS: u32 = 150;
pub const BLINK_DELAY_MIN_MS: u32 = 2000;
pub const BLINK_DELAY_MAX_MS: u32 = 6000;
pub const FIRST_BLINK_DELAY_MS: u32 = 2000;
pub const DOUBLE_BLINK_GAP_MS: u32 = 100;
pub const DOUBLE_BLINK_PROBABILITY: f32 = 0.3;

// Cursor overlay
pub const CURSOR_SQUARE_PX: u32 = 10;
