//! Separable Gaussian blur over the ping-pong pair.
//!
//! Each [`BlurStep`] is one render pass: the horizontal or vertical pipeline
//! reads the step's source and writes its target.

use wgpu::util::DeviceExt;

use super::schedule::{BlurSource, BlurStep, Orientation};
use super::types::{BlurUniforms, PingPongPair};
use crate::postprocess::{sampler_entry, texture_entry, uniform_entry, CAPTURE_COLOR_FORMAT};

/// Manages both blur pipelines and one bind group per possible source.
pub struct BlurPipeline {
    pipeline_h: wgpu::RenderPipeline,
    pipeline_v: wgpu::RenderPipeline,
    pub ping_pong: PingPongPair,
    bind_group_bright: wgpu::BindGroup,
    bind_group_ping_pong: [wgpu::BindGroup; 2],
}

impl BlurPipeline {
    /// Create the blur pipeline.
    ///
    /// - `bright_view`: bright-pass attachment of the capture target
    /// - `width`/`height`: ping-pong texture dimensions
    pub fn new(
        device: &wgpu::Device,
        bright_view: &wgpu::TextureView,
        width: u32,
        height: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blur shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/blur.wgsl").into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("blur sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blur uniforms"),
            contents: bytemuck::bytes_of(&BlurUniforms::for_size(width, height)),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("blur bind group layout"),
            entries: &[
                uniform_entry::<BlurUniforms>(0, wgpu::ShaderStages::FRAGMENT),
                texture_entry(1, wgpu::TextureViewDimension::D2),
                sampler_entry(2),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("blur pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let create_pipeline = |label: &str, entry_point: &str| -> wgpu::RenderPipeline {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(entry_point),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: CAPTURE_COLOR_FORMAT,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let pipeline_h = create_pipeline("blur h pipeline", "fs_blur_h");
        let pipeline_v = create_pipeline("blur v pipeline", "fs_blur_v");

        let ping_pong = PingPongPair::new(device, width, height);

        let create_bind_group = |view: &wgpu::TextureView, label: &str| {
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
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            })
        };

        let bind_group_bright = create_bind_group(bright_view, "blur bind group bright");
        let bind_group_ping_pong = [
            create_bind_group(&ping_pong.views[0], "blur bind group ping-pong 0"),
            create_bind_group(&ping_pong.views[1], "blur bind group ping-pong 1"),
        ];

        Self {
            pipeline_h,
            pipeline_v,
            ping_pong,
            bind_group_bright,
            bind_group_ping_pong,
        }
    }

    /// Record one blur pass into the command encoder.
    pub fn record_step(&self, encoder: &mut wgpu::CommandEncoder, step: &BlurStep) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("blur pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.ping_pong.views[step.target],
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

        let pipeline = match step.orientation {
            Orientation::Horizontal => &self.pipeline_h,
            Orientation::Vertical => &self.pipeline_v,
        };
        let bind_group = match step.source {
            BlurSource::BrightPass => &self.bind_group_bright,
            BlurSource::PingPong(index) => &self.bind_group_ping_pong[index],
        };
        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}
