//! Keyboard binding configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard bindings.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift, Super.
/// Multiple modifiers: "Ctrl+Shift+Q". Most bindings are a single key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeybindConfig {
    pub move_forward: String,
    pub move_backward: String,
    pub move_left: String,
    pub move_right: String,
    pub toggle_hdr: String,
    pub toggle_bloom: String,
    pub exposure_up: String,
    pub exposure_down: String,
    pub toggle_overlay: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            move_forward: "W".into(),
            move_backward: "S".into(),
            move_left: "A".into(),
            move_right: "D".into(),
            toggle_hdr: "U".into(),
            toggle_bloom: "N".into(),
            exposure_up: "L".into(),
            exposure_down: "J".into(),
            toggle_overlay: "F1".into(),
            quit: "K".into(),
        }
    }
}
