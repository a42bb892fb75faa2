//! Per-frame phase machine: Idle → Capturing → Blurring → Compositing → Idle.

use super::blur::{BlurSchedule, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    Idle,
    Capturing,
    Blurring { pass: u32, orientation: Orientation },
    Compositing,
}

impl FramePhase {
    /// The phase that follows `self` for a frame blurred with `schedule`.
    pub fn next(self, schedule: &BlurSchedule) -> FramePhase {
        match self {
            FramePhase::Idle => FramePhase::Capturing,
            FramePhase::Capturing => FramePhase::Blurring {
                pass: 0,
                orientation: Orientation::Horizontal,
            },
            FramePhase::Blurring { pass, orientation } if pass + 1 < schedule.passes() => {
                FramePhase::Blurring {
                    pass: pass + 1,
                    orientation: orientation.flipped(),
                }
            }
            FramePhase::Blurring { .. } => FramePhase::Compositing,
            FramePhase::Compositing => FramePhase::Idle,
        }
    }
}
