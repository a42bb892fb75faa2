/// Modifier that can prefix a Nightglow key binding in `[keybinds]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    /// Option on macOS.
    Alt,
    Shift,
    /// Cmd on macOS, Win on Windows.
    Super,
}

impl Modifier {
    /// Name shown in the overlay key hints, using the host platform's label.
    pub fn label(self) -> &'static str {
        match self {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt if cfg!(target_os = "macos") => "Option",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super if cfg!(target_os = "macos") => "Cmd",
            Modifier::Super if cfg!(target_os = "windows") => "Win",
            Modifier::Super => "Super",
        }
    }
}

/// A parsed binding: deduplicated modifiers in the order written, then the
/// canonical key name (`"W"`, `"F1"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}
