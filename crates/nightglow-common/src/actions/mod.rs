use serde::{Deserialize, Serialize};

mod action_enum;

pub use action_enum::*;

/// How a bound key turns into actions while it is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// Fires every frame the key is down.
    Continuous,
    /// Fires once per press-release cycle.
    Edge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_actions_have_labels() {
        for action in Action::ALL {
            assert!(!action.label().is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn movement_and_exposure_are_continuous() {
        assert_eq!(Action::MoveForward.trigger(), Trigger::Continuous);
        assert_eq!(Action::MoveBackward.trigger(), Trigger::Continuous);
        assert_eq!(Action::MoveLeft.trigger(), Trigger::Continuous);
        assert_eq!(Action::MoveRight.trigger(), Trigger::Continuous);
        assert_eq!(Action::IncreaseExposure.trigger(), Trigger::Continuous);
        assert_eq!(Action::DecreaseExposure.trigger(), Trigger::Continuous);
    }

    #[test]
    fn toggles_are_edge_triggered() {
        assert_eq!(Action::ToggleHdr.trigger(), Trigger::Edge);
        assert_eq!(Action::ToggleBloom.trigger(), Trigger::Edge);
        assert_eq!(Action::ToggleOverlay.trigger(), Trigger::Edge);
        assert_eq!(Action::Quit.trigger(), Trigger::Edge);
    }

    #[test]
    fn action_serde_roundtrip() {
        for action in Action::ALL {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
