//! Graceful shutdown: save program state, release GPU resources.

use nightglow_config::save_settings;

use super::core::NightglowApp;

impl NightglowApp {
    /// Save program state when configured, then drop the renderer.
    ///
    /// Runs once; later calls do nothing.
    pub(super) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        tracing::info!("Initiating graceful shutdown");

        if self.config.persistence.save_on_exit {
            if let Err(e) = save_settings(&self.paths.settings_file, &self.program.to_settings()) {
                tracing::warn!("Failed to save program state: {e}");
            }
        }

        self.render_state = None;

        tracing::info!("Graceful shutdown complete");
    }
}
