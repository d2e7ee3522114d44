//! Procedural wall pattern: a rigid checkerboard of tiles, each holding a
//! contrasting circle whose radius alternates by row.
//!
//! The generator is stateless and hard-edged (no antialiasing), so two
//! invocations produce bytewise-identical pixels. The result is uploaded
//! once as the room texture.

use crate::constants::{CIRCLE_RADIUS_LARGE, CIRCLE_RADIUS_SMALL, PATTERN_GRID, PATTERN_SIZE};

const BLACK: [u8; 4] = [0x00, 0x00, 0x00, 0xff];
const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Generate the RGBA8 pattern at the default resolution and grid density.
pub fn generate() -> Vec<u8> {
    generate_with(PATTERN_SIZE, PATTERN_GRID)
}

/// Generate an RGBA8 raster of `size`×`size` pixels holding a `grid`×`grid`
/// tile pattern. Tile (x, y) background is black when x + y is even; the
/// circle uses the contrast color. Even rows carry large circles, odd rows
/// small ones.
pub fn generate_with(size: u32, grid: u32) -> Vec<u8> {
    let mut pixels = vec![0u8; (size * size * 4) as usize];
    for py in 0..size {
        for px in 0..size {
            let at = ((py * size + px) * 4) as usize;
            pixels[at..at + 4].copy_from_slice(&texel(size, grid, px, py));
        }
    }
    pixels
}

/// Color of a single texel. Sampling happens at the texel center so circle
/// edges land deterministically.
pub fn texel(size: u32, grid: u32, px: u32, py: u32) -> [u8; 4] {
    let tile = size as f32 / grid as f32;
    let tx = ((px as f32 / tile) as u32).min(grid - 1);
    let ty = ((py as f32 / tile) as u32).min(grid - 1);
    let black_bg = (tx + ty) % 2 == 0;

    let radius = if ty % 2 == 0 {
        tile * CIRCLE_RADIUS_LARGE
    } else {
        tile * CIRCLE_RADIUS_SMALL
    };
    let cx = (tx as f32 + 0.5) * tile;
    let cy = (ty as f32 + 0.5) * tile;
    let dx = px as f32 + 0.5 - cx;
    let dy = py as f32 + 0.5 - cy;
    let in_circle = dx * dx + dy * dy <= radius * radius;

    match (black_bg, in_circle) {
        (true, false) | (false, true) => BLACK,
        _ => WHITE,
    }
}
