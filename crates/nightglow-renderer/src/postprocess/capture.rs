//! Dual-attachment offscreen target for the scene pass.

use nightglow_common::Rgb;

use super::{create_color_target, CAPTURE_COLOR_FORMAT, DEPTH_FORMAT};

/// Raw scene color, bright-pass color and depth, all at the fixed render
/// resolution.
pub struct CaptureTarget {
    pub color_texture: wgpu::Texture,
    pub color_view: wgpu::TextureView,
    pub bright_texture: wgpu::Texture,
    pub bright_view: wgpu::TextureView,
    pub depth_texture: wgpu::Texture,
    pub depth_view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl CaptureTarget {
    /// Create all three attachments. Callers wrap this in a validation error
    /// scope to detect an incomplete target.
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (color_texture, color_view) =
            create_color_target(device, width, height, "capture color");
        let (bright_texture, bright_view) =
            create_color_target(device, width, height, "capture bright");

        let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("capture depth"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            color_texture,
            color_view,
            bright_texture,
            bright_view,
            depth_texture,
            depth_view,
            width,
            height,
        }
    }

    /// Begin the scene pass. Color clears to `clear`, bright to transparent
    /// black, depth to 1.0.
    pub fn begin_pass<'e>(
        &self,
        encoder: &'e mut wgpu::CommandEncoder,
        clear: Rgb,
    ) -> wgpu::RenderPass<'e> {
        let clear_color = wgpu::Color {
            r: clear.r as f64,
            g: clear.g as f64,
            b: clear.b as f64,
            a: 1.0,
        };
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("capture pass"),
            color_attachments: &[
                Some(wgpu::RenderPassColorAttachment {
                    view: &self.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                }),
                Some(wgpu::RenderPassColorAttachment {
                    view: &self.bright_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                }),
            ],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        })
    }

    /// Color target states for pipelines drawing into this target.
    pub fn color_targets() -> [Option<wgpu::ColorTargetState>; 2] {
        let target = wgpu::ColorTargetState {
            format: CAPTURE_COLOR_FORMAT,
            blend: None,
            write_mask: wgpu::ColorWrites::ALL,
        };
        [Some(target.clone()), Some(target)]
    }
}
