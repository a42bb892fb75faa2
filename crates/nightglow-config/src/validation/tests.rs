//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = NightglowConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_blur_passes() {
    let mut config = NightglowConfig::default();
    config.render.blur_passes = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("render.blur_passes"));
}

#[test]
fn catches_too_many_blur_passes() {
    let mut config = NightglowConfig::default();
    config.render.blur_passes = MAX_BLUR_PASSES + 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("render.blur_passes"));
}

#[test]
fn catches_zero_render_size() {
    let mut config = NightglowConfig::default();
    config.render.width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("render.width"));
}

#[test]
fn catches_negative_exposure() {
    let mut config = NightglowConfig::default();
    config.post_process.exposure = -0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("post_process.exposure"));
}

#[test]
fn catches_nan_threshold() {
    let mut config = NightglowConfig::default();
    config.render.bright_threshold = f32::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("render.bright_threshold"));
}

#[test]
fn catches_pitch_out_of_range() {
    let mut config = NightglowConfig::default();
    config.camera.pitch = 95.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.pitch"));
}

#[test]
fn catches_far_not_beyond_near() {
    let mut config = NightglowConfig::default();
    config.camera.far = 0.05;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.far"));
}

#[test]
fn catches_too_many_point_lights() {
    let mut config = NightglowConfig::default();
    config.scene.point_lights.push(PointLightConfig::default());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.point_lights"));
}

#[test]
fn catches_missing_point_lights() {
    let mut config = NightglowConfig::default();
    config.scene.point_lights.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.point_lights"));
}

#[test]
fn catches_wrong_skybox_face_count() {
    let mut config = NightglowConfig::default();
    config.scene.skybox.faces.pop();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.skybox.faces"));
}

#[test]
fn disabled_skybox_skips_face_count() {
    let mut config = NightglowConfig::default();
    config.scene.skybox.enabled = false;
    config.scene.skybox.faces.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_object_scale() {
    let mut config = NightglowConfig::default();
    config.scene.objects[0].scale = [1.0, 0.0, 1.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.objects[0].scale"));
}

#[test]
fn catches_empty_scatter_range() {
    let mut config = NightglowConfig::default();
    config.scene.scatter[0].x_range = [5.0, 5.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.scatter[0].x_range"));
}

#[test]
fn catches_duplicate_keybinds() {
    let mut config = NightglowConfig::default();
    config.keybinds.toggle_bloom = "U".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate keybind"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = NightglowConfig::default();
    config.render.blur_passes = 0;
    config.camera.zoom = 90.0;
    config.post_process.exposure_step = 2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("render.blur_passes"));
    assert!(err.contains("camera.zoom"));
    assert!(err.contains("post_process.exposure_step"));
}
