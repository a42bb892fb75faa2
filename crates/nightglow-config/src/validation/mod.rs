//! Full configuration validation.
//!
//! Validates numeric ranges, scene shape and keybind uniqueness. Each domain
//! has its own submodule; this orchestrator calls them all and collects
//! errors into a single `ConfigError`.

mod camera;
mod helpers;
mod output;
mod scene;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::schema::NightglowConfig;
use nightglow_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NightglowConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    output::validate_window(&mut errors, config);
    output::validate_render(&mut errors, config);
    output::validate_post_process(&mut errors, config);
    camera::validate_camera(&mut errors, config);
    scene::validate_scene(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
