//! Scene content of the capture pass: lit objects, scatter sets, the
//! emissive light box and the skybox.
//!
//! Everything is built once at startup from `[scene]`. Models are shared by
//! source, so a scatter set of 100 trees loads its model once. Each model is
//! drawn part by part, one material bind group per part.

mod material;
mod pipeline;
mod plan;
mod scatter;

pub use pipeline::ScenePipelines;
pub use plan::{plan_draws, DrawKind, PlannedDraw};
pub use scatter::scatter_positions;

use std::collections::HashMap;
use std::path::Path;

use nightglow_config::schema::{MeshSource, SceneConfig};
use nightglow_config::NightglowConfig;
use nightglow_platform::resolve_asset;
use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::gpu::{aligned_stride, FrameUniforms, ObjectUniforms};
use crate::mesh::{self, GpuMesh};
use crate::model::{load_model, Model};
use crate::texture::CubemapImages;

use material::MaterialFactory;

struct DrawItem {
    model: usize,
    offset: u32,
    kind: DrawKind,
}

struct GpuPart {
    mesh: GpuMesh,
    material: wgpu::BindGroup,
}

struct GpuModel {
    parts: Vec<GpuPart>,
}

struct Skybox {
    bind_group: wgpu::BindGroup,
    model: usize,
}

/// Owns every GPU resource drawn into the capture target.
pub struct ScenePass {
    pipelines: ScenePipelines,
    frame: FrameUniforms,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_bind_group: wgpu::BindGroup,
    models: Vec<GpuModel>,
    draws: Vec<DrawItem>,
    skybox: Option<Skybox>,
}

impl ScenePass {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        config: &NightglowConfig,
        asset_root: &Path,
    ) -> Self {
        let scene = &config.scene;
        let pipelines = ScenePipelines::new(device);

        let frame = FrameUniforms::from_scene(scene, config.render.bright_threshold);
        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("frame uniforms"),
            contents: bytemuck::bytes_of(&frame),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bind group"),
            layout: &pipelines.frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let mut library =
            ModelLibrary::new(device, queue, &pipelines.material_layout, asset_root);
        let planned = plan_draws(scene);

        let stride = aligned_stride(
            std::mem::size_of::<ObjectUniforms>() as u64,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let mut object_bytes = Vec::new();
        let mut draws = Vec::with_capacity(planned.len());
        for draw in &planned {
            let Some(model) = library.get(&draw.mesh) else {
                continue;
            };
            let uniforms = match draw.kind {
                DrawKind::Lit { .. } => ObjectUniforms::new(draw.model, draw.color),
                DrawKind::Emissive => ObjectUniforms::emissive(draw.model, draw.color),
            };
            let offset = object_bytes.len();
            object_bytes.extend_from_slice(bytemuck::bytes_of(&uniforms));
            object_bytes.resize(offset + stride as usize, 0);
            draws.push(DrawItem {
                model,
                offset: offset as u32,
                kind: draw.kind,
            });
        }
        if object_bytes.is_empty() {
            object_bytes.resize(stride as usize, 0);
        }
        tracing::info!(
            "Scene: {} draws, {} models ({} planned)",
            draws.len(),
            library.models.len(),
            planned.len()
        );

        let object_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("object uniforms"),
            contents: &object_bytes,
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let object_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object bind group"),
            layout: &pipelines.object_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &object_buffer,
                    offset: 0,
                    size: std::num::NonZeroU64::new(std::mem::size_of::<ObjectUniforms>() as u64),
                }),
            }],
        });

        let skybox = if scene.skybox.enabled {
            let layout = &pipelines.skybox_layout;
            Self::build_skybox(device, queue, scene, asset_root, layout, &mut library)
        } else {
            None
        };
        let models = library.into_models();

        Self {
            pipelines,
            frame,
            frame_buffer,
            frame_bind_group,
            object_bind_group,
            models,
            draws,
            skybox,
        }
    }

    fn build_skybox(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &SceneConfig,
        asset_root: &Path,
        layout: &wgpu::BindGroupLayout,
        library: &mut ModelLibrary<'_>,
    ) -> Option<Skybox> {
        let faces: Vec<_> = scene
            .skybox
            .faces
            .iter()
            .map(|face| resolve_asset(asset_root, face))
            .collect();
        let cubemap = CubemapImages::load(&faces).upload(device, queue);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skybox bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&cubemap.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&cubemap.sampler),
                },
            ],
        });
        let model = library.get(&MeshSource::Cube)?;
        Some(Skybox { bind_group, model })
    }

    /// Upload this frame's camera matrices.
    pub fn update(&mut self, queue: &wgpu::Queue, camera: &Camera, aspect: f32) {
        self.frame.set_camera(camera, aspect);
        queue.write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&self.frame));
    }

    /// Record all scene draws into the capture pass.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(0, &self.frame_bind_group, &[]);

        for item in &self.draws {
            let pipeline = match item.kind {
                DrawKind::Lit {
                    cull_back_faces: true,
                } => &self.pipelines.lit_culled,
                DrawKind::Lit {
                    cull_back_faces: false,
                } => &self.pipelines.lit,
                DrawKind::Emissive => &self.pipelines.emissive,
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(1, &self.object_bind_group, &[item.offset]);
            for part in &self.models[item.model].parts {
                pass.set_bind_group(2, &part.material, &[]);
                part.mesh.draw(pass);
            }
        }

        if let Some(skybox) = &self.skybox {
            pass.set_pipeline(&self.pipelines.skybox);
            pass.set_bind_group(1, &skybox.bind_group, &[]);
            for part in &self.models[skybox.model].parts {
                part.mesh.draw(pass);
            }
        }
    }

    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }
}

/// Uploads each mesh source once. Failed model loads are remembered so the
/// warning is logged once per path.
struct ModelLibrary<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    material_layout: &'a wgpu::BindGroupLayout,
    asset_root: &'a Path,
    materials: MaterialFactory,
    models: Vec<GpuModel>,
    by_source: HashMap<MeshSource, Option<usize>>,
}

impl<'a> ModelLibrary<'a> {
    fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        material_layout: &'a wgpu::BindGroupLayout,
        asset_root: &'a Path,
    ) -> Self {
        Self {
            device,
            queue,
            material_layout,
            asset_root,
            materials: MaterialFactory::new(device, queue),
            models: Vec::new(),
            by_source: HashMap::new(),
        }
    }

    fn get(&mut self, source: &MeshSource) -> Option<usize> {
        if let Some(&cached) = self.by_source.get(source) {
            return cached;
        }
        let model = match source {
            MeshSource::Gltf(rel) => {
                let path = resolve_asset(self.asset_root, rel);
                match load_model(&path) {
                    Ok(model) => Some(model),
                    Err(e) => {
                        tracing::warn!("Skipping model {}: {e}", path.display());
                        None
                    }
                }
            }
            builtin => builtin_model(builtin),
        };
        let index = model.map(|model| self.push(source, &model));
        self.by_source.insert(source.clone(), index);
        index
    }

    fn push(&mut self, source: &MeshSource, model: &Model) -> usize {
        let label = String::from(source.clone());
        let parts = model
            .parts
            .iter()
            .map(|part| GpuPart {
                mesh: GpuMesh::upload(self.device, &label, &part.mesh),
                material: self.materials.bind_group(
                    self.device,
                    self.queue,
                    self.material_layout,
                    &label,
                    &part.material,
                    model.image(&part.material),
                ),
            })
            .collect();
        self.models.push(GpuModel { parts });
        self.models.len() - 1
    }

    fn into_models(self) -> Vec<GpuModel> {
        self.models
    }
}

fn builtin_model(source: &MeshSource) -> Option<Model> {
    let mesh = match source {
        MeshSource::Cube => mesh::cube(),
        MeshSource::Sphere => {
            mesh::generate_sphere(mesh::SPHERE_LATITUDES, mesh::SPHERE_LONGITUDES)
        }
        MeshSource::Plane => mesh::plane(),
        MeshSource::Gltf(_) => return None,
    };
    Some(Model::single(mesh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sources_are_single_untextured_parts() {
        for (source, triangles) in [(MeshSource::Cube, 12), (MeshSource::Plane, 2)] {
            let model = builtin_model(&source).unwrap();
            assert_eq!(model.parts.len(), 1);
            assert_eq!(model.triangle_count(), triangles);
            assert_eq!(model.parts[0].material.texture, None);
            assert_eq!(model.parts[0].material.alpha_cutoff, 0.0);
        }
        assert!(builtin_model(&MeshSource::Sphere).is_some());
    }

    #[test]
    fn gltf_source_is_not_builtin() {
        assert!(builtin_model(&MeshSource::Gltf("objects/bed/bed.glb".into())).is_none());
    }
}
