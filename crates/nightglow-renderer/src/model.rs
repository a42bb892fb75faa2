//! glTF model loading.
//!
//! Triangle primitives of every node in the default scene are grouped by
//! material into [`ModelPart`]s, with node transforms baked into positions
//! and normals. The material base color factor becomes the vertex color;
//! the base color texture, when present, is decoded to RGBA8 and referenced
//! by image index.

use std::path::Path;

use glam::{Mat3, Mat4, Vec3};
use gltf::image::Format;
use gltf::material::AlphaMode;

use crate::mesh::{face_normal, MeshData, Vertex};

/// Cutoff for `BLEND` materials: scene draws are not sorted, so blended
/// foliage is alpha-tested instead.
pub const BLEND_ALPHA_CUTOFF: f32 = 0.1;

/// glTF default for `MASK` materials without an explicit `alphaCutoff`.
pub const DEFAULT_MASK_CUTOFF: f32 = 0.5;

/// Error type for glTF loading.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to load glTF file: {0}")]
    LoadError(#[from] gltf::Error),

    #[error("missing position data for mesh: {0}")]
    MissingPositions(String),

    #[error("model contains no scene")]
    NoScene,

    #[error("model contains no triangles")]
    Empty,
}

/// A decoded RGBA8 texture image.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// How a part is shaded: optional base color texture and alpha test.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartMaterial {
    /// Index into [`Model::images`]; `None` samples white.
    pub texture: Option<usize>,
    /// Fragments with texture alpha below this are discarded. 0 keeps all.
    pub alpha_cutoff: f32,
}

/// Geometry sharing one material.
#[derive(Debug, Clone)]
pub struct ModelPart {
    pub mesh: MeshData,
    pub material: PartMaterial,
}

#[derive(Debug, Clone, Default)]
pub struct Model {
    pub parts: Vec<ModelPart>,
    /// Parallel to the document's images; `None` where decoding failed or
    /// the pixel format is unsupported.
    pub images: Vec<Option<ModelImage>>,
}

impl Model {
    /// An untextured, opaque model of one mesh (used for built-in shapes).
    pub fn single(mesh: MeshData) -> Self {
        Self {
            parts: vec![ModelPart {
                mesh,
                material: PartMaterial::default(),
            }],
            images: Vec::new(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    pub fn image(&self, material: &PartMaterial) -> Option<&ModelImage> {
        material
            .texture
            .and_then(|i| self.images.get(i))
            .and_then(Option::as_ref)
    }

    fn append(&mut self, material: PartMaterial, mesh: MeshData) {
        if mesh.is_empty() {
            return;
        }
        match self.parts.iter_mut().find(|p| p.material == material) {
            Some(part) => part.mesh.append(mesh),
            None => self.parts.push(ModelPart { mesh, material }),
        }
    }
}

/// Load a `.glb`/`.gltf` file, resolving external buffers and images
/// relative to it.
pub fn load_model(path: impl AsRef<Path>) -> Result<Model, ModelError> {
    let (document, buffers, images) = gltf::import(path.as_ref())?;
    flatten(&document, &buffers, &images)
}

/// Load a model from an in-memory `.glb` or self-contained `.gltf`.
pub fn load_model_from_slice(bytes: &[u8]) -> Result<Model, ModelError> {
    let (document, buffers, images) = gltf::import_slice(bytes)?;
    flatten(&document, &buffers, &images)
}

fn flatten(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
) -> Result<Model, ModelError> {
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(ModelError::NoScene)?;

    let mut model = Model {
        parts: Vec::new(),
        images: images.iter().enumerate().map(|(i, d)| to_rgba(i, d)).collect(),
    };
    for node in scene.nodes() {
        process_node(&node, Mat4::IDENTITY, buffers, &mut model)?;
    }

    if model.is_empty() {
        return Err(ModelError::Empty);
    }
    tracing::debug!(
        "Loaded glTF model: {} parts, {} triangles, {} textures",
        model.parts.len(),
        model.triangle_count(),
        model.images.iter().flatten().count()
    );
    Ok(model)
}

/// Process a glTF node and its children recursively.
fn process_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Model,
) -> Result<(), ModelError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        let name = mesh.name().unwrap_or("unnamed");
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                tracing::debug!("Skipping non-triangle primitive in mesh {name}");
                continue;
            }
            let material = primitive.material();
            let pbr = material.pbr_metallic_roughness();
            let [r, g, b, _] = pbr.base_color_factor();
            let base_texture = pbr.base_color_texture();

            let texture = base_texture
                .as_ref()
                .map(|info| info.texture().source().index())
                .filter(|&i| out.images.get(i).is_some_and(Option::is_some));
            let part_material = PartMaterial {
                texture,
                alpha_cutoff: alpha_cutoff(&material),
            };
            let uv_set = base_texture.map_or(0, |info| info.tex_coord());

            let part = extract_primitive(&primitive, buffers, name, [r, g, b], uv_set)?;
            out.append(part_material, transform(part, world));
        }
    }

    for child in node.children() {
        process_node(&child, world, buffers, out)?;
    }

    Ok(())
}

fn alpha_cutoff(material: &gltf::Material) -> f32 {
    match material.alpha_mode() {
        AlphaMode::Opaque => 0.0,
        AlphaMode::Mask => material.alpha_cutoff().unwrap_or(DEFAULT_MASK_CUTOFF),
        AlphaMode::Blend => BLEND_ALPHA_CUTOFF,
    }
}

/// Expand an 8-bit glTF image to RGBA8.
fn to_rgba(index: usize, data: &gltf::image::Data) -> Option<ModelImage> {
    let px = &data.pixels;
    let rgba: Vec<u8> = match data.format {
        Format::R8G8B8A8 => px.clone(),
        Format::R8G8B8 => px.chunks_exact(3).flat_map(|p| [p[0], p[1], p[2], 255]).collect(),
        Format::R8G8 => px.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0], p[1]]).collect(),
        Format::R8 => px.iter().flat_map(|&l| [l, l, l, 255]).collect(),
        other => {
            tracing::warn!("Image {index}: unsupported pixel format {other:?}, sampling white");
            return None;
        }
    };
    if rgba.len() != data.width as usize * data.height as usize * 4 {
        tracing::warn!("Image {index}: pixel data does not match {}x{}", data.width, data.height);
        return None;
    }
    Some(ModelImage {
        width: data.width,
        height: data.height,
        rgba,
    })
}

/// Read positions, normals, texture coordinates and indices from one
/// primitive.
fn extract_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    name: &str,
    color: [f32; 3],
    uv_set: u32,
) -> Result<MeshData, ModelError> {
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| ModelError::MissingPositions(name.to_string()))?
        .collect();

    let mut uvs: Vec<[f32; 2]> = reader
        .read_tex_coords(uv_set)
        .map(|coords| coords.into_f32().collect())
        .unwrap_or_default();
    uvs.resize(positions.len(), [0.0; 2]);

    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    let mesh = match reader.read_normals() {
        Some(normals) => MeshData {
            vertices: positions
                .iter()
                .zip(normals)
                .zip(&uvs)
                .map(|((&position, normal), &uv)| Vertex {
                    position,
                    normal,
                    color,
                    uv,
                })
                .collect(),
            indices,
        },
        None => flat_shaded(&positions, &uvs, &indices, color),
    };
    Ok(mesh)
}

/// Un-index a triangle list so every face gets its own geometric normal.
fn flat_shaded(
    positions: &[[f32; 3]],
    uvs: &[[f32; 2]],
    indices: &[u32],
    color: [f32; 3],
) -> MeshData {
    let mut mesh = MeshData::default();
    for tri in indices.chunks_exact(3) {
        let corner = |i: u32| positions.get(i as usize).copied();
        let [Some(a), Some(b), Some(c)] = [corner(tri[0]), corner(tri[1]), corner(tri[2])] else {
            continue;
        };
        let normal = face_normal(a, b, c).to_array();
        let base = mesh.vertices.len() as u32;
        for (&index, position) in tri.iter().zip([a, b, c]) {
            mesh.vertices.push(Vertex {
                position,
                normal,
                color,
                uv: uvs.get(index as usize).copied().unwrap_or_default(),
            });
        }
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    mesh
}

fn transform(mut mesh: MeshData, world: Mat4) -> MeshData {
    if world == Mat4::IDENTITY {
        return mesh;
    }
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    for v in &mut mesh.vertices {
        v.position = world.transform_point3(Vec3::from(v.position)).to_array();
        v.normal = (normal_matrix * Vec3::from(v.normal))
            .normalize_or_zero()
            .to_array();
    }
    mesh
}
