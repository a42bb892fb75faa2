//! CPU-side draw list for the capture pass.
//!
//! Order: placed objects, scatter sets, then the light box. The skybox is
//! drawn separately after all of these.

use glam::{Mat4, Vec3};
use nightglow_config::schema::{MeshSource, SceneConfig};

use super::scatter::scatter_positions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Lit { cull_back_faces: bool },
    Emissive,
}

/// One object instance before meshes are resolved on the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDraw {
    pub name: String,
    pub mesh: MeshSource,
    pub model: Mat4,
    pub color: [f32; 3],
    pub kind: DrawKind,
}

pub fn plan_draws(scene: &SceneConfig) -> Vec<PlannedDraw> {
    let mut draws = Vec::new();

    for object in &scene.objects {
        draws.push(PlannedDraw {
            name: object.name.clone(),
            mesh: object.mesh.clone(),
            model: placement(Vec3::from(object.position), Vec3::from(object.scale)),
            color: object.color.to_array(),
            kind: DrawKind::Lit {
                cull_back_faces: object.cull_back_faces,
            },
        });
    }

    for set in &scene.scatter {
        for (i, position) in scatter_positions(set).into_iter().enumerate() {
            draws.push(PlannedDraw {
                name: format!("{}[{i}]", set.name),
                mesh: set.mesh.clone(),
                model: placement(position, Vec3::splat(set.scale)),
                color: set.color.to_array(),
                kind: DrawKind::Lit {
                    cull_back_faces: set.cull_back_faces,
                },
            });
        }
    }

    if scene.light_box.enabled {
        if let Some(light) = scene.point_lights.first() {
            draws.push(PlannedDraw {
                name: "light box".into(),
                mesh: MeshSource::Cube,
                model: placement(Vec3::from(light.position), Vec3::splat(scene.light_box.scale)),
                color: scene.light_box.color.to_array(),
                kind: DrawKind::Emissive,
            });
        }
    }

    draws
}

fn placement(position: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_scale(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_draw_count() {
        let scene = SceneConfig::default();
        let draws = plan_draws(&scene);
        // 9 objects + 100 trees + light box
        assert_eq!(draws.len(), scene.objects.len() + 100 + 1);
    }

    #[test]
    fn light_box_is_last_and_emissive() {
        let draws = plan_draws(&SceneConfig::default());
        let last = draws.last().unwrap();
        assert_eq!(last.kind, DrawKind::Emissive);
        assert_eq!(last.mesh, MeshSource::Cube);
        assert_eq!(last.color, [14.0, 2.0, 25.0]);
        let translation = last.model.w_axis.truncate();
        assert!((translation - Vec3::splat(1.2)).length() < 1e-6);
    }

    #[test]
    fn disabled_light_box_is_omitted() {
        let mut scene = SceneConfig::default();
        scene.light_box.enabled = false;
        let draws = plan_draws(&scene);
        assert!(draws.iter().all(|d| d.kind != DrawKind::Emissive));
    }

    #[test]
    fn objects_come_before_scatter() {
        let scene = SceneConfig::default();
        let draws = plan_draws(&scene);
        assert_eq!(draws[0].name, scene.objects[0].name);
        assert_eq!(draws[scene.objects.len()].name, "trees[0]");
    }

    #[test]
    fn placement_scales_then_translates() {
        let m = placement(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(2.0));
        let p = m.transform_point3(Vec3::X);
        assert_eq!(p, Vec3::new(3.0, 2.0, 3.0));
    }
}
