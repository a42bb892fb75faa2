use super::types::KeyBind;

/// Display string for a binding, e.g. `"Ctrl+Shift+Q"` or `"F1"`.
///
/// Used by the debug overlay's key help line.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut parts: Vec<&str> = kb.modifiers.iter().map(|m| m.label()).collect();
    parts.push(&kb.key);
    parts.join("+")
}
