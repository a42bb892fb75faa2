//! Meshes drawn in the capture pass.
//!
//! Built-in shapes are generated on the CPU; glTF models are loaded by
//! [`crate::model`]. Both end up as [`MeshData`] and are uploaded once at
//! startup as a [`GpuMesh`].

mod gpu;
mod shapes;
mod sphere;
mod types;

pub use gpu::GpuMesh;
pub use shapes::{cube, plane};
pub use sphere::{generate_sphere, SPHERE_LATITUDES, SPHERE_LONGITUDES};
pub use types::{MeshData, Vertex};

use glam::Vec3;

/// Geometric normal of a triangle from its winding.
pub fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Vec3 {
    let (a, b, c) = (Vec3::from(a), Vec3::from(b), Vec3::from(c));
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every non-degenerate triangle winds counter-clockwise seen from the
    /// side its vertex normals point to.
    fn assert_outward_winding(mesh: &MeshData) {
        for [a, b, c] in mesh.triangles() {
            let n = face_normal(a.position, b.position, c.position);
            if n == Vec3::ZERO {
                continue;
            }
            let avg = Vec3::from(a.normal) + Vec3::from(b.normal) + Vec3::from(c.normal);
            assert!(n.dot(avg) > 0.0, "inward triangle {a:?} {b:?} {c:?}");
        }
    }

    #[test]
    fn cube_has_24_vertices_and_12_triangles() {
        let mesh = cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn cube_spans_unit_extent() {
        let mesh = cube();
        for v in &mesh.vertices {
            for c in v.position {
                assert!((c.abs() - 0.5).abs() < 1e-6, "corner off the unit cube: {c}");
            }
        }
    }

    #[test]
    fn cube_faces_wind_outward() {
        assert_outward_winding(&cube());
    }

    #[test]
    fn plane_faces_up() {
        let mesh = plane();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.vertices.iter().all(|v| v.position[1] == 0.0));
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
        assert_outward_winding(&mesh);
    }

    #[test]
    fn shape_uvs_stay_in_unit_square() {
        for mesh in [cube(), plane(), generate_sphere(8, 12)] {
            for v in &mesh.vertices {
                assert!(v.uv.iter().all(|c| (0.0..=1.0).contains(c)), "uv {:?}", v.uv);
            }
        }
    }

    #[test]
    fn plane_corners_span_full_texture() {
        let uvs: Vec<[f32; 2]> = plane().vertices.iter().map(|v| v.uv).collect();
        assert_eq!(uvs, vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
    }

    #[test]
    fn sphere_counts() {
        let mesh = generate_sphere(16, 24);
        assert_eq!(mesh.vertices.len(), 17 * 25);
        assert_eq!(mesh.indices.len(), 16 * 24 * 6);
    }

    #[test]
    fn sphere_vertices_on_unit_sphere() {
        let mesh = generate_sphere(8, 12);
        for v in &mesh.vertices {
            let len = Vec3::from(v.position).length();
            assert!((len - 1.0).abs() < 1e-5, "vertex off sphere: len={len}");
        }
    }

    #[test]
    fn sphere_winds_outward() {
        assert_outward_winding(&generate_sphere(SPHERE_LATITUDES, SPHERE_LONGITUDES));
    }

    #[test]
    fn sphere_clamps_degenerate_params() {
        let mesh = generate_sphere(0, 0);
        assert_eq!(mesh.indices.len(), 2 * 3 * 6);
    }

    #[test]
    fn sphere_indices_in_bounds() {
        let mesh = generate_sphere(4, 6);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn sphere_poles() {
        let mesh = generate_sphere(8, 12);
        let first = mesh.vertices[0].position;
        assert!((first[1] - 1.0).abs() < 1e-6, "north pole y should be 1.0");
        let last = mesh.vertices[mesh.vertices.len() - 1].position;
        assert!((last[1] + 1.0).abs() < 1e-6, "south pole y should be -1.0");
    }
}
