//! Runtime post-processing parameters.

use nightglow_config::schema::PostProcessConfig;

/// HDR / bloom switches and tone-mapping exposure, read once per frame by the
/// composite stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostProcessParams {
    pub hdr: bool,
    pub bloom: bool,
    pub exposure: f32,
}

impl Default for PostProcessParams {
    fn default() -> Self {
        Self::from_config(&PostProcessConfig::default())
    }
}

impl PostProcessParams {
    pub fn from_config(config: &PostProcessConfig) -> Self {
        Self {
            hdr: config.hdr,
            bloom: config.bloom,
            exposure: config.exposure,
        }
    }

    /// Flip HDR and return the new state.
    pub fn toggle_hdr(&mut self) -> bool {
        self.hdr = !self.hdr;
        self.hdr
    }

    /// Flip bloom and return the new state.
    pub fn toggle_bloom(&mut self) -> bool {
        self.bloom = !self.bloom;
        self.bloom
    }

    /// Unbounded above.
    pub fn increase_exposure(&mut self, step: f32) {
        self.exposure += step;
    }

    /// Clamped at zero.
    pub fn decrease_exposure(&mut self, step: f32) {
        self.exposure = (self.exposure - step).max(0.0);
    }
}
