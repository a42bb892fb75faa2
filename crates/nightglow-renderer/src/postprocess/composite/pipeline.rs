//! Composite pipeline: final pass from the offscreen targets to the surface.
//!
//! Samples the raw scene color and one ping-pong target, then renders a
//! fullscreen triangle. One bind group exists per ping-pong index; the blur
//! schedule picks which one is used.

use crate::postprocess::{sampler_entry, texture_entry, uniform_entry, PostProcessParams};

/// GPU-side uniform block matching the WGSL `CompositeUniforms` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CompositeUniforms {
    pub hdr: u32,
    pub bloom: u32,
    pub exposure: f32,
    pub apply_gamma: u32,
}

impl CompositeUniforms {
    pub fn new(params: &PostProcessParams, apply_gamma: bool) -> Self {
        Self {
            hdr: params.hdr as u32,
            bloom: params.bloom as u32,
            exposure: params.exposure,
            apply_gamma: apply_gamma as u32,
        }
    }
}

/// Manages the composite render pipeline, bind groups and uniform buffer.
pub struct CompositePipeline {
    pipeline: wgpu::RenderPipeline,
    bind_groups: [wgpu::BindGroup; 2],
    uniform_buffer: wgpu::Buffer,
    /// The surface format does not encode sRGB, so the shader applies gamma.
    apply_gamma: bool,
}

impl CompositePipeline {
    /// Create the composite pipeline.
    ///
    /// - `scene_view`: raw color attachment of the capture target
    /// - `blur_views`: both ping-pong views
    /// - `format`: surface texture format
    pub fn new(
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        blur_views: [&wgpu::TextureView; 2],
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("composite shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/composite.wgsl").into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("composite sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("composite uniforms"),
            size: std::mem::size_of::<CompositeUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("composite bind group layout"),
            entries: &[
                uniform_entry::<CompositeUniforms>(0, wgpu::ShaderStages::FRAGMENT),
                texture_entry(1, wgpu::TextureViewDimension::D2),
                texture_entry(2, wgpu::TextureViewDimension::D2),
                sampler_entry(3),
            ],
        });

        let create_bind_group = |blur_view: &wgpu::TextureView, label: &str| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(scene_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::TextureView(blur_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 3,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            })
        };
        let bind_groups = [
            create_bind_group(blur_views[0], "composite bind group 0"),
            create_bind_group(blur_views[1], "composite bind group 1"),
        ];

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("composite pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("composite pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_groups,
            uniform_buffer,
            apply_gamma: !format.is_srgb(),
        }
    }

    /// Upload this frame's parameters.
    pub fn update(&self, queue: &wgpu::Queue, params: &PostProcessParams) {
        let uniforms = CompositeUniforms::new(params, self.apply_gamma);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the composite pass onto the surface, reading ping-pong
    /// `blur_index`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        blur_index: usize,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("composite pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        debug_assert!(blur_index < 2, "ping-pong index {blur_index} out of range");
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_groups[blur_index], &[]);
        pass.draw(0..3, 0..1);
    }

    pub fn applies_gamma(&self) -> bool {
        self.apply_gamma
    }
}
