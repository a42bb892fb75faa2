//! Ping-pong bookkeeping for the iterative blur.
//!
//! Orientation starts horizontal and flips after every pass. A horizontal
//! pass writes ping-pong index 1, a vertical pass index 0. The first pass
//! reads the bright-pass attachment, every later pass reads what the
//! previous pass wrote.

/// Blur direction of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// Ping-pong index written by a pass with this orientation.
    pub fn target_index(self) -> usize {
        self.is_horizontal() as usize
    }
}

/// Texture a blur pass samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurSource {
    BrightPass,
    PingPong(usize),
}

/// One framebuffer bind of the blur loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurStep {
    pub pass: u32,
    pub orientation: Orientation,
    pub source: BlurSource,
    pub target: usize,
}

/// Fixed sequence of `passes` one-dimensional blur passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurSchedule {
    passes: u32,
}

impl BlurSchedule {
    /// At least one pass is always scheduled.
    pub fn new(passes: u32) -> Self {
        Self {
            passes: passes.max(1),
        }
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn step(&self, pass: u32) -> Option<BlurStep> {
        if pass >= self.passes {
            return None;
        }
        let orientation = if pass % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let target = orientation.target_index();
        let source = if pass == 0 {
            BlurSource::BrightPass
        } else {
            BlurSource::PingPong(1 - target)
        };
        Some(BlurStep {
            pass,
            orientation,
            source,
            target,
        })
    }

    pub fn steps(&self) -> impl Iterator<Item = BlurStep> + '_ {
        (0..self.passes).filter_map(move |pass| self.step(pass))
    }

    /// Orientation after the flip that follows the last pass.
    pub fn final_orientation(&self) -> Orientation {
        if self.passes % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Ping-pong index holding the finished blur: `!horizontal_final`.
    pub fn output_index(&self) -> usize {
        (!self.final_orientation().is_horizontal()) as usize
    }
}
