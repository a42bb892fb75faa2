use nightglow_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a binding string like `"W"`, `"F1"` or `"Ctrl+Shift+Q"` into a
/// [`KeyBind`].
///
/// Tokens are split on `+`. Every token but the last must be a modifier;
/// the last token is the key (a lone modifier such as `"Shift"` is a valid
/// key). Accepted modifier spellings:
/// - `Ctrl` / `Control`
/// - `Alt` / `Option` / `Opt`
/// - `Shift`
/// - `Super` / `Win` / `Meta` / `Cmd` / `Command`
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((last, leading)) = tokens.split_last() else {
        return Err(PlatformError::InvalidKeybind("empty keybind string".into()));
    };
    if last.is_empty() {
        return Err(PlatformError::InvalidKeybind(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in leading {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::InvalidKeybind(format!("unrecognized modifier '{token}' in '{s}'"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(last),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "super" | "win" | "meta" | "cmd" | "command" => Some(Modifier::Super),
        _ => None,
    }
}

/// Canonical spelling for a key token, matching what
/// [`normalize_winit_key`](crate::winit_keys::normalize_winit_key) produces.
pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        "period" => ".".into(),
        "comma" => ",".into(),
        "minus" => "-".into(),
        "equal" | "equals" | "plus" => "=".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            // "f1" -> "F1", "backspace" -> "Backspace"
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => lower,
            }
        }
    }
}
