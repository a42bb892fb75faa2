//! Scene validation: lights, skybox faces, object transforms, scatter sets.

use crate::schema::{NightglowConfig, MAX_POINT_LIGHTS};

use super::helpers::{validate_positive3, validate_range, validate_range_f32};

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &NightglowConfig) {
    let scene = &config.scene;
    validate_range_f32(errors, "scene.shininess", scene.shininess, 1.0, 256.0);

    let lights = scene.point_lights.len();
    if lights == 0 || lights > MAX_POINT_LIGHTS {
        errors.push(format!(
            "scene.point_lights has {lights} entries, expected 1 to {MAX_POINT_LIGHTS}"
        ));
    }
    for (i, light) in scene.point_lights.iter().enumerate() {
        validate_range_f32(
            errors,
            &format!("scene.point_lights[{i}].constant"),
            light.constant,
            0.0,
            100.0,
        );
        if light.constant + light.linear + light.quadratic <= 0.0 {
            errors.push(format!(
                "scene.point_lights[{i}] attenuation terms must not all be zero"
            ));
        }
    }

    if scene.skybox.enabled && scene.skybox.faces.len() != 6 {
        errors.push(format!(
            "scene.skybox.faces has {} entries, expected 6",
            scene.skybox.faces.len()
        ));
    }

    if scene.light_box.enabled {
        validate_range_f32(errors, "scene.light_box.scale", scene.light_box.scale, 0.0, 100.0);
    }

    for (i, obj) in scene.objects.iter().enumerate() {
        validate_positive3(errors, &format!("scene.objects[{i}].scale"), obj.scale);
    }

    for (i, set) in scene.scatter.iter().enumerate() {
        validate_range(errors, &format!("scene.scatter[{i}].count"), set.count, 0, 10_000);
        if !(set.scale > 0.0) {
            errors.push(format!("scene.scatter[{i}].scale = {} must be positive", set.scale));
        }
        for (axis, [min, max]) in [("x_range", set.x_range), ("z_range", set.z_range)] {
            if !(min < max) {
                errors.push(format!(
                    "scene.scatter[{i}].{axis} = [{min}, {max}] must have min < max"
                ));
            }
        }
    }
}
