//! Window creation, renderer initialization and program state restore.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use nightglow_common::NightglowError;
use nightglow_config::load_settings;
use nightglow_renderer::RenderState;

use super::core::NightglowApp;

impl NightglowApp {
    /// Create the window and initialize the GPU renderer.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), NightglowError> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| NightglowError::Other(format!("failed to create window: {e}")))?;

        let rs = pollster::block_on(RenderState::new(
            window.clone(),
            &self.config,
            &self.paths.asset_root,
        ))
        .map_err(|e| NightglowError::Renderer(e.to_string()))?;
        tracing::info!("Scene ready ({} draws)", rs.scene_draw_count());

        self.render_state = Some(rs);
        self.window = Some(window);
        self.apply_cursor_mode();
        tracing::info!("Window created and renderer initialized");
        Ok(())
    }

    /// Read the program state file over the current state.
    ///
    /// A missing file is normal. A malformed one keeps its leading fields
    /// and defaults for the rest.
    pub(super) fn restore_program_state(&mut self) {
        let mut settings = self.program.to_settings();
        if let Err(e) = load_settings(&self.paths.settings_file, &mut settings) {
            tracing::warn!("Program state partially restored: {e}");
        }
        self.program.restore(&settings);
    }
}
