//! Render pipelines of the capture pass.
//!
//! Group 0 is the per-frame `FrameUniforms` block, group 1 either the
//! per-object block (dynamic offset) or the skybox cubemap. Group 2 of the
//! object pipelines is the part's material: alpha cutoff, base color texture
//! and sampler.

use crate::gpu::{FrameUniforms, MaterialUniforms, ObjectUniforms};
use crate::mesh::Vertex;
use crate::postprocess::{sampler_entry, texture_entry, uniform_entry, CaptureTarget, DEPTH_FORMAT};

pub struct ScenePipelines {
    pub lit: wgpu::RenderPipeline,
    pub lit_culled: wgpu::RenderPipeline,
    pub emissive: wgpu::RenderPipeline,
    pub skybox: wgpu::RenderPipeline,
    pub frame_layout: wgpu::BindGroupLayout,
    pub object_layout: wgpu::BindGroupLayout,
    pub skybox_layout: wgpu::BindGroupLayout,
    pub material_layout: wgpu::BindGroupLayout,
}

impl ScenePipelines {
    pub fn new(device: &wgpu::Device) -> Self {
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/scene.wgsl").into()),
        });
        let skybox_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skybox shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/skybox.wgsl").into()),
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame bind group layout"),
            entries: &[uniform_entry::<FrameUniforms>(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<ObjectUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let skybox_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("skybox bind group layout"),
            entries: &[
                texture_entry(0, wgpu::TextureViewDimension::Cube),
                sampler_entry(1),
            ],
        });

        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("material bind group layout"),
            entries: &[
                uniform_entry::<MaterialUniforms>(0, wgpu::ShaderStages::FRAGMENT),
                texture_entry(1, wgpu::TextureViewDimension::D2),
                sampler_entry(2),
            ],
        });

        let object_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("scene pipeline layout"),
                bind_group_layouts: &[&frame_layout, &object_layout, &material_layout],
                push_constant_ranges: &[],
            });
        let skybox_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("skybox pipeline layout"),
                bind_group_layouts: &[&frame_layout, &skybox_layout],
                push_constant_ranges: &[],
            });

        let targets = CaptureTarget::color_targets();

        let create_pipeline = |label: &str,
                               layout: &wgpu::PipelineLayout,
                               shader: &wgpu::ShaderModule,
                               fs_entry: &str,
                               cull_mode: Option<wgpu::Face>,
                               depth_write: bool,
                               depth_compare: wgpu::CompareFunction|
         -> wgpu::RenderPipeline {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::LAYOUT],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some(fs_entry),
                    targets: &targets,
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: depth_write,
                    depth_compare,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let lit = create_pipeline(
            "lit pipeline",
            &object_pipeline_layout,
            &scene_shader,
            "fs_lit",
            None,
            true,
            wgpu::CompareFunction::Less,
        );
        let lit_culled = create_pipeline(
            "lit culled pipeline",
            &object_pipeline_layout,
            &scene_shader,
            "fs_lit",
            Some(wgpu::Face::Back),
            true,
            wgpu::CompareFunction::Less,
        );
        let emissive = create_pipeline(
            "emissive pipeline",
            &object_pipeline_layout,
            &scene_shader,
            "fs_emissive",
            Some(wgpu::Face::Back),
            true,
            wgpu::CompareFunction::Less,
        );
        // Drawn last at depth 1.0: passes only where nothing else was drawn.
        let skybox = create_pipeline(
            "skybox pipeline",
            &skybox_pipeline_layout,
            &skybox_shader,
            "fs_main",
            None,
            false,
            wgpu::CompareFunction::LessEqual,
        );

        Self {
            lit,
            lit_culled,
            emissive,
            skybox,
            frame_layout,
            object_layout,
            skybox_layout,
            material_layout,
        }
    }
}
