//! Offscreen rendering and post-processing configuration.

use serde::{Deserialize, Serialize};

/// Upper bound on blur passes accepted by validation.
pub const MAX_BLUR_PASSES: u32 = 64;

/// Offscreen target configuration.
///
/// The capture target and the ping-pong pair are created once at this size
/// and never resized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Internal render width in pixels (valid range: 1-8192).
    pub width: u32,
    /// Internal render height in pixels (valid range: 1-8192).
    pub height: u32,
    /// Number of one-dimensional blur passes (valid range: 1-64).
    pub blur_passes: u32,
    /// Luminance above which a fragment lands in the bright-pass attachment.
    pub bright_threshold: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            blur_passes: 10,
            bright_threshold: 1.0,
        }
    }
}

/// Initial post-processing parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostProcessConfig {
    pub hdr: bool,
    pub bloom: bool,
    /// Tone-mapping exposure (valid range: 0.0-100.0).
    pub exposure: f32,
    /// Exposure change per frame while an exposure key is held (0.0-1.0).
    pub exposure_step: f32,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            hdr: false,
            bloom: false,
            exposure: 1.0,
            exposure_step: 0.001,
        }
    }
}
