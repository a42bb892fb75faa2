use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// Modifier key state as reported by the window system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    fn bits(self) -> u8 {
        let mut mods = 0u8;
        if self.ctrl {
            mods |= MOD_CTRL;
        }
        if self.alt {
            mods |= MOD_ALT;
        }
        if self.shift {
            mods |= MOD_SHIFT;
        }
        if self.super_key {
            mods |= MOD_SUPER;
        }
        mods
    }
}

/// A canonical key representation for HashMap lookup.
///
/// Modifiers are stored as a bitmask so two combos compare equal regardless
/// of the order the modifiers were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "W", "F1").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from live modifier state and a normalized key name.
    pub fn new(mods: Modifiers, key: impl Into<String>) -> Self {
        Self {
            mods: mods.bits(),
            key: key.into(),
        }
    }

    /// The same key with no modifiers.
    pub fn bare(&self) -> Self {
        Self {
            mods: 0,
            key: self.key.clone(),
        }
    }

    /// Reconstruct a [`KeyBind`] for display purposes.
    pub(super) fn to_keybind(&self) -> KeyBind {
        let modifiers = [
            (MOD_CTRL, Modifier::Ctrl),
            (MOD_ALT, Modifier::Alt),
            (MOD_SHIFT, Modifier::Shift),
            (MOD_SUPER, Modifier::Super),
        ]
        .into_iter()
        .filter(|(bit, _)| self.mods & bit != 0)
        .map(|(_, m)| m)
        .collect();
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}
