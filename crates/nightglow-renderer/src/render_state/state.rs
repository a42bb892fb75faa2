use std::path::Path;
use std::sync::Arc;

use nightglow_config::NightglowConfig;
use winit::window::Window;

use crate::gpu::{GpuContext, PhysicalSize, RendererError};
use crate::overlay::OverlayRenderer;
use crate::postprocess::blur::{BlurPipeline, BlurSchedule};
use crate::postprocess::composite::CompositePipeline;
use crate::postprocess::CaptureTarget;
use crate::scene::ScenePass;

/// GPU context plus every stage of the frame: scene capture, blur,
/// composite and overlay.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) scene: ScenePass,
    pub(super) capture: CaptureTarget,
    pub(super) blur: BlurPipeline,
    pub(super) composite: CompositePipeline,
    pub(super) overlay: OverlayRenderer,
    pub(super) schedule: BlurSchedule,
    /// Fixed offscreen resolution.
    pub(super) render_size: PhysicalSize,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    ///
    /// Offscreen targets are created once at `render.width`×`render.height`
    /// and never resized.
    pub async fn new(
        window: Arc<Window>,
        config: &NightglowConfig,
        asset_root: &Path,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.vsync).await?;
        let render_size = PhysicalSize {
            width: config.render.width.max(1),
            height: config.render.height.max(1),
        };

        gpu.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let capture = CaptureTarget::new(&gpu.device, render_size.width, render_size.height);
        let blur = BlurPipeline::new(
            &gpu.device,
            &capture.bright_view,
            render_size.width,
            render_size.height,
        );
        if let Some(err) = gpu.device.pop_error_scope().await {
            tracing::warn!("incomplete offscreen target: {err}");
        }

        let composite = CompositePipeline::new(
            &gpu.device,
            &capture.color_view,
            [&blur.ping_pong.views[0], &blur.ping_pong.views[1]],
            gpu.format(),
        );
        let scene = ScenePass::new(&gpu.device, &gpu.queue, config, asset_root);
        let overlay = OverlayRenderer::new(&gpu.device, &gpu.queue, gpu.format());
        let schedule = BlurSchedule::new(config.render.blur_passes);

        tracing::info!(
            "Render targets {}x{}, {} blur passes, gamma in shader: {}",
            render_size.width,
            render_size.height,
            schedule.passes(),
            composite.applies_gamma(),
        );

        Ok(Self {
            gpu,
            scene,
            capture,
            blur,
            composite,
            overlay,
            schedule,
            render_size,
        })
    }

    /// Handle a window resize by reconfiguring the surface only.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        tracing::debug!(
            "Surface resized to {width}x{height}; offscreen targets stay {}x{}",
            self.render_size.width,
            self.render_size.height
        );
    }

    /// Projection aspect ratio, taken from the fixed render size.
    pub fn aspect(&self) -> f32 {
        self.render_size.aspect()
    }

    pub fn blur_schedule(&self) -> &BlurSchedule {
        &self.schedule
    }

    pub fn scene_draw_count(&self) -> usize {
        self.scene.draw_count()
    }
}
