//! Keybind registry: maps parsed `KeyBind` values to runtime `Action`s.

mod key_combo;
mod registry;

pub use key_combo::{KeyCombo, Modifiers};
pub use registry::KeybindRegistry;

#[cfg(test)]
mod tests {
    use super::key_combo::*;
    use super::*;
    use crate::keymap::parse_keybind;
    use nightglow_common::Action;
    use nightglow_config::schema::KeybindConfig;

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Default::default()
        }
    }

    #[test]
    fn keycombo_from_keybind() {
        let kb = parse_keybind("Ctrl+G").unwrap();
        let combo = KeyCombo::from_keybind(&kb);
        assert_eq!(combo.mods & MOD_CTRL, MOD_CTRL);
        assert_eq!(combo.key, "G");
    }

    #[test]
    fn keycombo_from_modifiers() {
        let mods = Modifiers {
            ctrl: true,
            shift: true,
            ..Default::default()
        };
        let combo = KeyCombo::new(mods, "A");
        assert_eq!(combo.mods, MOD_CTRL | MOD_SHIFT);
        assert_eq!(combo.key, "A");
    }

    #[test]
    fn keycombo_equality_ignores_modifier_order() {
        let a = KeyCombo::from_keybind(&parse_keybind("Shift+Ctrl+X").unwrap());
        let b = KeyCombo::from_keybind(&parse_keybind("Ctrl+Shift+X").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn registry_from_default_config() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn registry_lookup_defaults() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let none = Modifiers::default();
        assert_eq!(registry.lookup(&KeyCombo::new(none, "W")), Some(Action::MoveForward));
        assert_eq!(registry.lookup(&KeyCombo::new(none, "U")), Some(Action::ToggleHdr));
        assert_eq!(registry.lookup(&KeyCombo::new(none, "N")), Some(Action::ToggleBloom));
        assert_eq!(registry.lookup(&KeyCombo::new(none, "J")), Some(Action::DecreaseExposure));
        assert_eq!(registry.lookup(&KeyCombo::new(none, "L")), Some(Action::IncreaseExposure));
        assert_eq!(registry.lookup(&KeyCombo::new(none, "F1")), Some(Action::ToggleOverlay));
        assert_eq!(registry.lookup(&KeyCombo::new(none, "K")), Some(Action::Quit));
    }

    #[test]
    fn registry_lookup_falls_back_to_bare_key() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.lookup(&KeyCombo::new(ctrl(), "W")), Some(Action::MoveForward));
    }

    #[test]
    fn registry_exact_modifier_binding_wins() {
        let config = KeybindConfig {
            quit: "Ctrl+W".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.lookup(&KeyCombo::new(ctrl(), "W")), Some(Action::Quit));
        assert_eq!(
            registry.lookup(&KeyCombo::new(Modifiers::default(), "W")),
            Some(Action::MoveForward)
        );
    }

    #[test]
    fn registry_lookup_miss() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.lookup(&KeyCombo::new(Modifiers::default(), "Z")), None);
    }

    #[test]
    fn registry_skips_invalid_bindings() {
        let config = KeybindConfig {
            quit: "Hyper+K".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 9);
        assert!(registry.keybind_for_action(Action::Quit).is_none());
    }

    #[test]
    fn registry_reverse_lookup() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.keybind_for_action(Action::ToggleOverlay).as_deref(), Some("F1"));
    }
}
