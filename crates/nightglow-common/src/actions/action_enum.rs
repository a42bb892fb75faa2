use serde::{Deserialize, Serialize};

use super::Trigger;

/// Every user-triggerable action in the application.
///
/// Keybinds resolve to an `Action`; the app applies it to the program state
/// during per-frame input polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Camera --
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,

    // -- Post-processing --
    ToggleHdr,
    ToggleBloom,
    IncreaseExposure,
    DecreaseExposure,

    // -- UI --
    ToggleOverlay,

    // -- Window --
    Quit,
}

impl Action {
    /// Every action, in keybind-config order.
    pub const ALL: &'static [Action] = &[
        Action::MoveForward,
        Action::MoveBackward,
        Action::MoveLeft,
        Action::MoveRight,
        Action::ToggleHdr,
        Action::ToggleBloom,
        Action::IncreaseExposure,
        Action::DecreaseExposure,
        Action::ToggleOverlay,
        Action::Quit,
    ];

    pub fn trigger(&self) -> Trigger {
        match self {
            Action::MoveForward
            | Action::MoveBackward
            | Action::MoveLeft
            | Action::MoveRight
            | Action::IncreaseExposure
            | Action::DecreaseExposure => Trigger::Continuous,
            Action::ToggleHdr | Action::ToggleBloom | Action::ToggleOverlay | Action::Quit => {
                Trigger::Edge
            }
        }
    }

    /// Human-readable label, used by the debug overlay help line.
    pub fn label(&self) -> &'static str {
        match self {
            Action::MoveForward => "Move Forward",
            Action::MoveBackward => "Move Backward",
            Action::MoveLeft => "Move Left",
            Action::MoveRight => "Move Right",
            Action::ToggleHdr => "Toggle HDR",
            Action::ToggleBloom => "Toggle Bloom",
            Action::IncreaseExposure => "Exposure Up",
            Action::DecreaseExposure => "Exposure Down",
            Action::ToggleOverlay => "Toggle Overlay",
            Action::Quit => "Quit",
        }
    }
}
