mod display;
mod parse;
mod types;

pub use display::keybind_to_display;
pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letter() {
        let kb = parse_keybind("w").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "W");
    }

    #[test]
    fn parse_function_key() {
        assert_eq!(parse_keybind("F1").unwrap().key, "F1");
        assert_eq!(parse_keybind("f12").unwrap().key, "F12");
    }

    #[test]
    fn parse_multi_modifier_keybind() {
        let kb = parse_keybind("Ctrl+Shift+Q").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb.key, "Q");
    }

    #[test]
    fn parse_modifier_aliases() {
        assert_eq!(parse_keybind("Option+L").unwrap().modifiers, vec![Modifier::Alt]);
        assert_eq!(parse_keybind("Cmd+Q").unwrap().modifiers, vec![Modifier::Super]);
        assert_eq!(parse_keybind("Control+J").unwrap().modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(parse_keybind("Esc").unwrap().key, "Escape");
        assert_eq!(parse_keybind("return").unwrap().key, "Enter");
        assert_eq!(parse_keybind("space").unwrap().key, "Space");
        assert_eq!(parse_keybind("Period").unwrap().key, ".");
    }

    #[test]
    fn lone_modifier_is_a_key() {
        let kb = parse_keybind("Shift").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "Shift");
    }

    #[test]
    fn parse_empty_string_fails() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("Ctrl+").is_err());
    }

    #[test]
    fn parse_unknown_modifier_fails() {
        let err = parse_keybind("Hyper+K").unwrap_err().to_string();
        assert!(err.contains("Hyper"));
    }

    #[test]
    fn parse_duplicate_modifiers_deduplicated() {
        let kb = parse_keybind("Ctrl+Ctrl+A").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn display_plain_key() {
        let kb = parse_keybind("u").unwrap();
        assert_eq!(keybind_to_display(&kb), "U");
    }

    #[test]
    fn display_with_modifiers() {
        let kb = parse_keybind("Ctrl+Shift+T").unwrap();
        assert_eq!(keybind_to_display(&kb), "Ctrl+Shift+T");
    }

    #[test]
    fn modifier_labels_match_host_platform() {
        assert_eq!(Modifier::Ctrl.label(), "Ctrl");
        assert_eq!(Modifier::Shift.label(), "Shift");
        if cfg!(target_os = "linux") {
            assert_eq!(Modifier::Alt.label(), "Alt");
            assert_eq!(Modifier::Super.label(), "Super");
        }
    }
}
