//! Winit key name normalization.
//!
//! The app turns a winit `Key` into a string (`format!("{named:?}")` for
//! named keys, the character itself otherwise). This module maps those
//! strings onto the names produced by
//! [`parse_keybind`](crate::keymap::parse_keybind), so a config binding and
//! a live key event meet as equal [`KeyCombo`](crate::input::KeyCombo)s.

/// Convert a winit key name to the normalized string used by `KeyCombo`.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        " " => "Space".into(),
        // Shifted digits/punctuation reported as characters map back to the
        // physical key's unshifted name where bindings commonly use it.
        "+" => "=".into(),
        "_" => "-".into(),
        _ if key.chars().count() == 1 => key.to_uppercase(),
        // F1..F24, Escape, Shift, Control and other named keys pass through.
        _ => key.to_string(),
    }
}
