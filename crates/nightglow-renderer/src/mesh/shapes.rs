//! Built-in flat-shaded shapes: unit cube and ground quad.

use glam::Vec3;

use super::types::{MeshData, Vertex};

/// Face normal plus two in-plane axes with `u × v == normal`, so corners
/// emitted in (-,-) (+,-) (+,+) order wind counter-clockwise from outside.
const CUBE_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

const QUAD_CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Unit cube (side 1, centered at origin), 24 vertices / 36 indices.
///
/// Used for `cube` objects, the light box and the skybox.
pub fn cube() -> MeshData {
    let mut mesh = MeshData::default();
    for (normal, u, v) in CUBE_FACES {
        mesh.append(quad(normal * 0.5, u * 0.5, v * 0.5, normal));
    }
    mesh
}

/// Ground quad in the XZ plane spanning `[-1, 1]`, facing +Y.
pub fn plane() -> MeshData {
    quad(Vec3::ZERO, Vec3::X, Vec3::NEG_Z, Vec3::Y)
}

fn quad(center: Vec3, u: Vec3, v: Vec3, normal: Vec3) -> MeshData {
    // (-1, -1) maps to the bottom-left of the texture
    let vertices = QUAD_CORNERS
        .iter()
        .map(|&(s, t)| {
            Vertex::new((center + u * s + v * t).to_array(), normal.to_array())
                .with_uv([(s + 1.0) * 0.5, (1.0 - t) * 0.5])
        })
        .collect();
    MeshData {
        vertices,
        indices: QUAD_INDICES.to_vec(),
    }
}
