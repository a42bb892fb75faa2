//! Camera validation (pitch, zoom, clip planes, speeds).

use crate::schema::NightglowConfig;

use super::helpers::validate_range_f32;

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &NightglowConfig) {
    let cam = &config.camera;
    validate_range_f32(errors, "camera.pitch", cam.pitch, -89.0, 89.0);
    validate_range_f32(errors, "camera.zoom", cam.zoom, 1.0, 45.0);
    validate_range_f32(errors, "camera.speed", cam.speed, 0.0, 1000.0);
    validate_range_f32(errors, "camera.sensitivity", cam.sensitivity, 0.0, 10.0);
    validate_range_f32(errors, "camera.near", cam.near, 0.001, 100.0);
    if !(cam.far > cam.near) {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            cam.far, cam.near
        ));
    }
}
