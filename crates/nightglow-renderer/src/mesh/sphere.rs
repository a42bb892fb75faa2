//! UV sphere generation.

use std::f32::consts::PI;

use super::types::{MeshData, Vertex};

/// Latitude bands and longitude segments of the built-in `sphere` mesh.
pub const SPHERE_LATITUDES: u32 = 32;
pub const SPHERE_LONGITUDES: u32 = 48;

/// Generate an indexed UV sphere of radius 1.0, centered at origin.
///
/// `n_lat` = number of latitude bands (rows), `n_lon` = number of longitude
/// segments (columns). The grid has `(n_lat + 1) * (n_lon + 1)` vertices and
/// each quad is split into 2 triangles wound counter-clockwise from outside.
/// North pole is (0, 1, 0).
pub fn generate_sphere(n_lat: u32, n_lon: u32) -> MeshData {
    let n_lat = n_lat.max(2);
    let n_lon = n_lon.max(3);

    let mut vertices = Vec::with_capacity(((n_lat + 1) * (n_lon + 1)) as usize);
    for lat in 0..=n_lat {
        for lon in 0..=n_lon {
            let p = sphere_point(lat, lon, n_lat, n_lon);
            // unit sphere: normal == position
            let uv = [lon as f32 / n_lon as f32, lat as f32 / n_lat as f32];
            vertices.push(Vertex::new(p, p).with_uv(uv));
        }
    }

    let row = n_lon + 1;
    let mut indices = Vec::with_capacity((n_lat * n_lon * 6) as usize);
    for lat in 0..n_lat {
        for lon in 0..n_lon {
            let i00 = lat * row + lon;
            let i01 = i00 + 1;
            let i10 = i00 + row;
            let i11 = i10 + 1;
            indices.extend_from_slice(&[i00, i01, i10, i10, i01, i11]);
        }
    }

    MeshData { vertices, indices }
}

/// Compute a point on the unit sphere from grid indices.
fn sphere_point(lat: u32, lon: u32, n_lat: u32, n_lon: u32) -> [f32; 3] {
    let theta = (lat as f32 / n_lat as f32) * PI; // 0..PI (north to south)
    let phi = (lon as f32 / n_lon as f32) * 2.0 * PI; // 0..2PI

    let sin_theta = theta.sin();
    let cos_theta = theta.cos();
    let sin_phi = phi.sin();
    let cos_phi = phi.cos();

    [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi]
}
