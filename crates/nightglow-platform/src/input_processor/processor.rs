use std::collections::BTreeSet;

use nightglow_common::{Action, Trigger};

use crate::input::{KeyCombo, KeybindRegistry, Modifiers};

/// Turns key press/release events into per-frame actions.
///
/// Events only update the held-key set. [`poll`](Self::poll) runs once per
/// frame and resolves every held key through the registry: continuous
/// actions fire on every poll, edge actions fire on the first poll after the
/// press and then stay latched until the key is released.
#[derive(Debug, Default)]
pub struct InputProcessor {
    held: BTreeSet<String>,
    latched: BTreeSet<String>,
    modifiers: Modifiers,
}

impl InputProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Record a key event. `key_name` must already be normalized.
    ///
    /// OS auto-repeat presses are harmless: the key is already held.
    pub fn process_key(&mut self, key_name: &str, is_press: bool) {
        if is_press {
            self.held.insert(key_name.to_string());
        } else {
            self.held.remove(key_name);
            self.latched.remove(key_name);
        }
    }

    /// Forget every held key, e.g. when the window loses focus and release
    /// events will never arrive.
    pub fn clear(&mut self) {
        self.held.clear();
        self.latched.clear();
    }

    pub fn is_held(&self, key_name: &str) -> bool {
        self.held.contains(key_name)
    }

    /// Resolve the actions that fire this frame, in key-name order.
    pub fn poll(&mut self, registry: &KeybindRegistry) -> Vec<Action> {
        let mut actions = Vec::new();

        for key in &self.held {
            let Some(action) = registry.lookup(&KeyCombo::new(self.modifiers, key.as_str())) else {
                continue;
            };
            match action.trigger() {
                Trigger::Continuous => actions.push(action),
                Trigger::Edge => {
                    if self.latched.insert(key.clone()) {
                        actions.push(action);
                    }
                }
            }
        }

        actions
    }
}
