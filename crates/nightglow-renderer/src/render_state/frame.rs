use nightglow_common::Rgb;

use crate::camera::Camera;
use crate::gpu::RendererError;
use crate::postprocess::{FramePhase, PostProcessParams};

use super::helpers::log_first_frame;
use super::RenderState;

/// Program state read by one frame.
pub struct FrameInput<'a> {
    pub camera: &'a Camera,
    pub post: PostProcessParams,
    pub clear_color: Rgb,
    /// Overlay text, `None` when the overlay is hidden.
    pub overlay: Option<&'a [String]>,
}

impl RenderState {
    /// Render a complete frame: capture, blur, composite, overlay, present.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    /// Only an out-of-memory surface is reported as an error.
    pub fn render_frame(&mut self, input: &FrameInput<'_>) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("Surface out of memory");
                return Err(RendererError::SurfaceError("out of memory".into()));
            }
            Err(e) => {
                tracing::warn!("Skipping frame: {e}");
                return Ok(());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = self.aspect();
        self.scene.update(&self.gpu.queue, input.camera, aspect);
        self.composite.update(&self.gpu.queue, &input.post);
        if let Some(lines) = input.overlay {
            if let Err(e) = self.overlay.prepare(
                &self.gpu.device,
                &self.gpu.queue,
                self.gpu.size.width,
                self.gpu.size.height,
                lines,
            ) {
                tracing::warn!("Overlay not prepared: {e}");
            }
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("nightglow frame encoder"),
            });

        let mut phase = FramePhase::Idle;
        loop {
            phase = phase.next(&self.schedule);
            tracing::trace!(?phase, "frame phase");
            match phase {
                FramePhase::Capturing => {
                    let mut pass = self.capture.begin_pass(&mut encoder, input.clear_color);
                    self.scene.draw(&mut pass);
                }
                FramePhase::Blurring { pass, .. } => {
                    if let Some(step) = self.schedule.step(pass) {
                        self.blur.record_step(&mut encoder, &step);
                    }
                }
                FramePhase::Compositing => {
                    self.composite
                        .render(&mut encoder, &view, self.schedule.output_index());
                }
                FramePhase::Idle => break,
            }
        }

        if input.overlay.is_some() {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("overlay pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.overlay.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if input.overlay.is_some() {
            self.overlay.trim();
        }

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
