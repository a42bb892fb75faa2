//! Mesh vertex types and buffer layout.

/// A single vertex of every mesh drawn in the capture pass.
///
/// Layout: position(vec3) + normal(vec3) + color(vec3) + uv(vec2) = 44 bytes.
/// `color` carries the glTF material base color; built-in shapes use white
/// and take their color from the object uniforms. `uv` addresses the
/// material's base color texture.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self {
            position,
            normal,
            color: [1.0; 3],
            uv: [0.0; 2],
        }
    }

    pub fn with_uv(self, uv: [f32; 2]) -> Self {
        Self { uv, ..self }
    }

    /// wgpu vertex buffer layout for `Vertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            // color: vec3<f32> at offset 24
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 24,
                shader_location: 2,
            },
            // uv: vec2<f32> at offset 36
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 36,
                shader_location: 3,
            },
        ],
    };
}

/// CPU-side indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append another mesh, rebasing its indices.
    pub fn append(&mut self, other: MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }

    /// Iterate triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [&Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                &self.vertices[tri[0] as usize],
                &self.vertices[tri[1] as usize],
                &self.vertices[tri[2] as usize],
            ]
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_size_is_44_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 44);
    }

    #[test]
    fn vertex_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn new_vertex_is_white() {
        let v = Vertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0]);
        assert_eq!(v.color, [1.0; 3]);
        assert_eq!(v.uv, [0.0; 2]);
        assert_eq!(bytemuck::bytes_of(&v).len(), 44);
    }

    #[test]
    fn layout_covers_every_field() {
        let attrs = Vertex::LAYOUT.attributes;
        assert_eq!(Vertex::LAYOUT.array_stride, 44);
        let last = attrs[attrs.len() - 1];
        assert_eq!(last.shader_location, 3);
        assert_eq!(last.offset + last.format.size(), 44);
    }

    #[test]
    fn append_rebases_indices() {
        let tri = MeshData {
            vertices: vec![Vertex::new([0.0; 3], [0.0, 1.0, 0.0]); 3],
            indices: vec![0, 1, 2],
        };
        let mut mesh = tri.clone();
        mesh.append(tri);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
