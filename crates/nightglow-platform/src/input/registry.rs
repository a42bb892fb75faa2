use std::collections::HashMap;

use nightglow_common::Action;
use nightglow_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
///
/// Built once from [`KeybindConfig`] at startup.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped, leaving
    /// that action unbound.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 10] = [
            (&config.move_forward, Action::MoveForward),
            (&config.move_backward, Action::MoveBackward),
            (&config.move_left, Action::MoveLeft),
            (&config.move_right, Action::MoveRight),
            (&config.toggle_hdr, Action::ToggleHdr),
            (&config.toggle_bloom, Action::ToggleBloom),
            (&config.exposure_up, Action::IncreaseExposure),
            (&config.exposure_down, Action::DecreaseExposure),
            (&config.toggle_overlay, Action::ToggleOverlay),
            (&config.quit, Action::Quit),
        ];

        let mut bindings = HashMap::new();
        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}' for {action:?}: {e}");
                }
            }
        }

        Self { bindings }
    }

    /// Look up an action for a key combination.
    ///
    /// A combo with modifiers that has no binding of its own falls back to
    /// the bare key, so holding Shift does not stop `W` from moving.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings
            .get(combo)
            .or_else(|| {
                if combo.mods == 0 {
                    None
                } else {
                    self.bindings.get(&combo.bare())
                }
            })
            .copied()
    }

    /// Display string for an action's keybind (reverse lookup).
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
