//! Room geometry providers.
//!
//! The scene renders one enclosing textured volume around the camera. Two
//! interchangeable constructions exist behind `RoomGeometry`: an open room
//! made of four flat planes, and a closed rounded cube whose interior is
//! made visible by culling front faces. Both produce a plain vertex/index
//! mesh with the texture repeat baked into the UVs, so the render path is
//! identical for either variant.

use crate::constants::{
    FLAT_ROOM_SIZE, FLAT_TEXTURE_REPEAT, ROUNDED_CORNER_RADIUS, ROUNDED_ROOM_SIZE,
    ROUNDED_SEGMENTS, ROUNDED_TEXTURE_REPEAT,
};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RoomVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct RoomMesh {
    pub vertices: Vec<RoomVertex>,
    pub indices: Vec<u32>,
}

impl RoomMesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// A construction strategy for the enclosing volume. Implementations share
/// lifecycle and render plumbing; only the mesh and culling differ.
pub trait RoomGeometry {
    fn label(&self) -> &'static str;
    /// True when only the interior of a closed volume should be visible,
    /// i.e. front faces are culled. Open constructions render double-sided.
    fn interior_only(&self) -> bool;
    fn mesh(&self) -> RoomMesh;
}

/// Select a provider by the mount container's `data-room` attribute value.
pub fn for_variant(variant: Option<&str>) -> Box<dyn RoomGeometry> {
    match variant {
        Some("rounded") => Box::new(RoundedRoom),
        _ => Box::new(FlatRoom),
    }
}

// ---------------- Flat variant ----------------

/// Four inward-facing planes: left and right walls, floor, ceiling. Front
/// and back stay open so the camera looks straight into the room.
pub struct FlatRoom;

impl RoomGeometry for FlatRoom {
    fn label(&self) -> &'static str {
        "flat"
    }

    fn interior_only(&self) -> bool {
        false
    }

    fn mesh(&self) -> RoomMesh {
        let h = FLAT_ROOM_SIZE / 2.0;
        let r = FLAT_TEXTURE_REPEAT;
        let mut mesh = RoomMesh::default();
        // left wall
        push_quad(
            &mut mesh,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
            r,
        );
        // right wall
        push_quad(
            &mut mesh,
            [
                Vec3::new(h, -h, h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
            ],
            r,
        );
        // floor
        push_quad(
            &mut mesh,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
            r,
        );
        // ceiling
        push_quad(
            &mut mesh,
            [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
            ],
            r,
        );
        mesh
    }
}

fn push_quad(mesh: &mut RoomMesh, corners: [Vec3; 4], repeat: f32) {
    let base = mesh.vertices.len() as u32;
    let uvs = [[0.0, repeat], [repeat, repeat], [repeat, 0.0], [0.0, 0.0]];
    for (corner, uv) in corners.iter().zip(uvs) {
        mesh.vertices.push(RoomVertex {
            position: corner.to_array(),
            uv,
        });
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

// ---------------- Rounded variant ----------------

/// One closed rounded cube. Corner rounding follows the usual clamp-and-
/// project construction: every surface point is pulled onto a sphere of the
/// corner radius around the clamped inner core, which leaves flat faces
/// flat and bends only the border band.
pub struct RoundedRoom;

impl RoomGeometry for RoundedRoom {
    fn label(&self) -> &'static str {
        "rounded"
    }

    fn interior_only(&self) -> bool {
        true
    }

    fn mesh(&self) -> RoomMesh {
        let h = ROUNDED_ROOM_SIZE / 2.0;
        let radius = ROUNDED_CORNER_RADIUS;
        let grid = ROUNDED_SEGMENTS * 2; // cells per face side
        let repeat = ROUNDED_TEXTURE_REPEAT;

        // (normal, tangent1, tangent2) with t1 × t2 = normal, so index
        // winding is counter-clockwise seen from outside each face.
        let faces: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];

        let core = Vec3::splat(h - radius);
        let mut mesh = RoomMesh::default();
        for (normal, t1, t2) in faces {
            let base = mesh.vertices.len() as u32;
            for b in 0..=grid {
                for a in 0..=grid {
                    let u = a as f32 / grid as f32;
                    let v = b as f32 / grid as f32;
                    let on_box = normal * h + t1 * (u * 2.0 - 1.0) * h + t2 * (v * 2.0 - 1.0) * h;
                    let clamped = on_box.clamp(-core, core);
                    let position = clamped + (on_box - clamped).normalize() * radius;
                    mesh.vertices.push(RoomVertex {
                        position: position.to_array(),
                        uv: [u * repeat, v * repeat],
                    });
                }
            }
            let stride = grid + 1;
            for b in 0..grid {
                for a in 0..grid {
                    let i0 = base + a + b * stride;
                    let i1 = i0 + 1;
                    let i2 = i0 + 1 + stride;
                    let i3 = i0 + stride;
                    mesh.indices.extend_from_slice(&[i0, i1, i2, i0, i2, i3]);
                }
            }
        }
        mesh
    }
}
