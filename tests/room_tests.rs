// Host-side tests for the room geometry providers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/room.rs"]
mod room;

use constants::*;
use room::*;

#[test]
fn variant_selection_defaults_to_flat() {
    assert_eq!(for_variant(None).label(), "flat");
    assert_eq!(for_variant(Some("flat")).label(), "flat");
    assert_eq!(for_variant(Some("rounded")).label(), "rounded");
    assert_eq!(for_variant(Some("bogus")).label(), "flat");
}

#[test]
fn flat_room_is_four_quads_on_the_cube_shell() {
    let provider = FlatRoom;
    assert!(!provider.interior_only());
    let mesh = provider.mesh();
    assert_eq!(mesh.vertices.len(), 16);
    assert_eq!(mesh.indices.len(), 24);

    let h = FLAT_ROOM_SIZE / 2.0;
    for v in &mesh.vertices {
        for c in v.position {
            assert!((c.abs() - h).abs() < 1e-6, "vertex off the shell: {:?}", v.position);
        }
        for t in v.uv {
            assert!((0.0..=FLAT_TEXTURE_REPEAT).contains(&t));
        }
    }

    // each quad is fixed on the x or y axis (walls, floor, ceiling); the
    // front and back of the room stay open
    let mut planes: Vec<(usize, f32)> = Vec::new();
    for quad in mesh.vertices.chunks_exact(4) {
        let fixed = (0..3)
            .find(|&axis| {
                quad.iter()
                    .all(|v| (v.position[axis] - quad[0].position[axis]).abs() < 1e-6)
            })
            .expect("quad is not axis-aligned");
        assert_ne!(fixed, 2, "unexpected wall closing the front or back");
        planes.push((fixed, quad[0].position[fixed]));
    }
    planes.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(planes, vec![(0, -h), (0, h), (1, -h), (1, h)]);
}

#[test]
fn flat_room_indices_are_in_range() {
    let mesh = FlatRoom.mesh();
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len());
    }
    assert_eq!(mesh.index_count(), mesh.indices.len() as u32);
}

#[test]
fn rounded_room_stays_inside_its_box() {
    let provider = RoundedRoom;
    assert!(provider.interior_only());
    let mesh = provider.mesh();

    let grid = ROUNDED_SEGMENTS * 2;
    let per_face = ((grid + 1) * (grid + 1)) as usize;
    assert_eq!(mesh.vertices.len(), per_face * 6);
    assert_eq!(mesh.indices.len(), (grid * grid * 6 * 6) as usize);

    let h = ROUNDED_ROOM_SIZE / 2.0;
    for v in &mesh.vertices {
        for c in v.position {
            assert!(c.abs() <= h + 1e-4, "vertex outside the box: {:?}", v.position);
        }
        for t in v.uv {
            assert!((0.0..=ROUNDED_TEXTURE_REPEAT).contains(&t));
        }
    }
}

#[test]
fn rounded_room_keeps_faces_flat_and_corners_rounded() {
    let mesh = RoundedRoom.mesh();
    let h = ROUNDED_ROOM_SIZE / 2.0;
    let core = h - ROUNDED_CORNER_RADIUS;

    // points over the flat middle of a face still sit on the full half-extent
    let mut flat_face_hits = 0;
    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        if x.abs() <= core && y.abs() <= core {
            assert!((z.abs() - h).abs() < 1e-4, "face bowed at {:?}", v.position);
            flat_face_hits += 1;
        }
    }
    assert!(flat_face_hits > 0);

    // a fully rounded corner pulls in by the chamfer of the corner sphere
    let expected_corner = core + ROUNDED_CORNER_RADIUS / 3.0_f32.sqrt();
    let max_corner = mesh
        .vertices
        .iter()
        .map(|v| v.position.iter().map(|c| c.abs()).fold(0.0_f32, f32::max))
        .fold(0.0_f32, f32::max);
    assert!(max_corner <= h + 1e-4);
    let corner_vertex = mesh.vertices.iter().find(|v| {
        v.position.iter().all(|c| (c.abs() - expected_corner).abs() < 1e-3)
    });
    assert!(corner_vertex.is_some(), "no spherical corner vertex found");
}

#[test]
fn rounded_room_indices_are_in_range() {
    let mesh = RoundedRoom.mesh();
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len());
    }
}
