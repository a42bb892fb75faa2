//! Window, offscreen target and post-processing validation.

use crate::schema::{NightglowConfig, MAX_BLUR_PASSES};

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &NightglowConfig) {
    validate_range(errors, "window.width", config.window.width, 1, 16384);
    validate_range(errors, "window.height", config.window.height, 1, 16384);
}

/// Offscreen sizes, blur pass count and bright threshold.
pub(crate) fn validate_render(errors: &mut Vec<String>, config: &NightglowConfig) {
    let render = &config.render;
    validate_range(errors, "render.width", render.width, 1, 8192);
    validate_range(errors, "render.height", render.height, 1, 8192);
    validate_range(errors, "render.blur_passes", render.blur_passes, 1, MAX_BLUR_PASSES);
    validate_range_f32(
        errors,
        "render.bright_threshold",
        render.bright_threshold,
        0.0,
        1000.0,
    );
}

pub(crate) fn validate_post_process(errors: &mut Vec<String>, config: &NightglowConfig) {
    let post = &config.post_process;
    validate_range_f32(errors, "post_process.exposure", post.exposure, 0.0, 100.0);
    validate_range_f32(errors, "post_process.exposure_step", post.exposure_step, 0.0, 1.0);
}
