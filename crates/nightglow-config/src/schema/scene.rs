//! Scene content configuration: lights, skybox, objects and scatter sets.

use nightglow_common::Rgb;
use serde::{Deserialize, Serialize};

/// Number of point lights the scene shader has room for.
pub const MAX_POINT_LIGHTS: usize = 2;

/// Where an object's geometry comes from.
///
/// Serialized as a plain string: `"cube"`, `"sphere"` and `"plane"` name the
/// built-in meshes, anything else is a glTF path relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MeshSource {
    Cube,
    Sphere,
    Plane,
    Gltf(String),
}

impl From<String> for MeshSource {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "cube" => MeshSource::Cube,
            "sphere" => MeshSource::Sphere,
            "plane" => MeshSource::Plane,
            _ => MeshSource::Gltf(s),
        }
    }
}

impl From<MeshSource> for String {
    fn from(m: MeshSource) -> Self {
        match m {
            MeshSource::Cube => "cube".into(),
            MeshSource::Sphere => "sphere".into(),
            MeshSource::Plane => "plane".into(),
            MeshSource::Gltf(path) => path,
        }
    }
}

/// Six cubemap face images, in layer order +X, -X, +Y, -Y, +Z, -Z.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyboxConfig {
    pub enabled: bool,
    pub faces: Vec<String>,
}

impl Default for SkyboxConfig {
    fn default() -> Self {
        let faces = ["ft", "bk", "up", "dn", "rt", "lf"]
            .iter()
            .map(|side| format!("textures/nightsky/nightsky_{side}.tga"))
            .collect();
        Self {
            enabled: true,
            faces,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub direction: [f32; 3],
    pub ambient: Rgb,
    pub diffuse: Rgb,
    pub specular: Rgb,
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            direction: [-0.2, -0.1, 0.3],
            ambient: Rgb::new(0.255, 0.255, 0.01),
            diffuse: Rgb::new(0.024, 0.23, 0.14),
            specular: Rgb::new(0.3, 0.144, 0.255),
        }
    }
}

/// Point light with constant/linear/quadratic attenuation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointLightConfig {
    pub position: [f32; 3],
    pub ambient: Rgb,
    pub diffuse: Rgb,
    pub specular: Rgb,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self {
            position: [1.2, 1.2, 1.2],
            ambient: Rgb::new(0.05, 0.05, 0.05),
            diffuse: Rgb::new(0.8, 0.8, 0.8),
            specular: Rgb::WHITE,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

fn default_point_lights() -> Vec<PointLightConfig> {
    vec![
        PointLightConfig::default(),
        PointLightConfig {
            position: [6.7, 0.2, 7.8],
            ambient: Rgb::new(0.135, 0.205, 0.25),
            diffuse: Rgb::new(0.001, 0.191, 0.255),
            specular: Rgb::new(1.0, 0.144, 0.25),
            constant: 1.0,
            linear: 0.10,
            quadratic: 0.035,
        },
    ]
}

/// Emissive cube drawn at the first point light.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightBoxConfig {
    pub enabled: bool,
    pub color: Rgb,
    pub scale: f32,
}

impl Default for LightBoxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Rgb::new(14.0, 2.0, 25.0),
            scale: 0.06,
        }
    }
}

/// A single placed object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneObjectConfig {
    pub name: String,
    pub mesh: MeshSource,
    pub position: [f32; 3],
    pub scale: [f32; 3],
    /// Multiplied with the mesh's own base color.
    pub color: Rgb,
    pub cull_back_faces: bool,
}

impl Default for SceneObjectConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            mesh: MeshSource::Cube,
            position: [0.0; 3],
            scale: [1.0; 3],
            color: Rgb::WHITE,
            cull_back_faces: false,
        }
    }
}

impl SceneObjectConfig {
    fn placed(name: &str, mesh: MeshSource, position: [f32; 3], scale: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            mesh,
            position,
            scale,
            ..Default::default()
        }
    }
}

fn default_objects() -> Vec<SceneObjectConfig> {
    let gltf = |path: &str| MeshSource::Gltf(path.into());
    vec![
        SceneObjectConfig {
            color: Rgb::new(0.05, 0.12, 0.06),
            cull_back_faces: true,
            ..SceneObjectConfig::placed("ground", MeshSource::Plane, [0.0, -1.0, 0.0], [20.0; 3])
        },
        SceneObjectConfig {
            color: Rgb::new(1.0, 0.85, 0.0),
            cull_back_faces: true,
            ..SceneObjectConfig::placed("pac-man", MeshSource::Sphere, [7.0, -0.5, 7.0], [0.5; 3])
        },
        SceneObjectConfig::placed(
            "cottage",
            gltf("objects/cottage/cottage.glb"),
            [1.0, -1.0, 1.0],
            [0.5, 0.6, 0.6],
        ),
        SceneObjectConfig::placed(
            "piano",
            gltf("objects/piano/piano.glb"),
            [0.2, -0.9, 0.3],
            [0.4; 3],
        ),
        SceneObjectConfig::placed("bed", gltf("objects/bed/bed.glb"), [0.3, -1.0, 1.9], [0.06; 3]),
        SceneObjectConfig::placed("pool", gltf("objects/pool/pool.glb"), [8.0, -1.0, 6.0], [0.3; 3]),
        SceneObjectConfig::placed(
            "plants",
            gltf("objects/plants/plants.glb"),
            [2.7, -0.8, 2.5],
            [0.7; 3],
        ),
        SceneObjectConfig::placed("wood", gltf("objects/wood/wood.glb"), [6.0, -1.3, 9.0], [0.2; 3]),
        SceneObjectConfig::placed(
            "table",
            gltf("objects/table/table.glb"),
            [0.9, -1.0, -0.3],
            [0.9; 3],
        ),
    ]
}

/// A mesh repeated at seeded pseudo-random positions on the XZ plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScatterConfig {
    pub name: String,
    pub mesh: MeshSource,
    /// Number of instances (valid range: 0-10000).
    pub count: u32,
    pub seed: u64,
    /// Half-open `[min, max)` range for X.
    pub x_range: [f32; 2],
    /// Half-open `[min, max)` range for Z.
    pub z_range: [f32; 2],
    pub y: f32,
    pub scale: f32,
    pub color: Rgb,
    pub cull_back_faces: bool,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            name: "trees".into(),
            mesh: MeshSource::Gltf("objects/tree/tree.glb".into()),
            count: 100,
            seed: 9,
            x_range: [-199.0, 51.0],
            z_range: [-200.0, 0.0],
            y: -1.0,
            scale: 0.8,
            color: Rgb::WHITE,
            cull_back_faces: false,
        }
    }
}

/// Everything drawn in the capture pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory that model and texture paths are resolved against.
    pub asset_root: String,
    /// Blinn-Phong specular exponent (valid range: 1.0-256.0).
    pub shininess: f32,
    pub skybox: SkyboxConfig,
    pub directional_light: DirectionalLightConfig,
    pub point_lights: Vec<PointLightConfig>,
    pub light_box: LightBoxConfig,
    pub objects: Vec<SceneObjectConfig>,
    pub scatter: Vec<ScatterConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_root: "resources".into(),
            shininess: 32.0,
            skybox: SkyboxConfig::default(),
            directional_light: DirectionalLightConfig::default(),
            point_lights: default_point_lights(),
            light_box: LightBoxConfig::default(),
            objects: default_objects(),
            scatter: vec![ScatterConfig::default()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_source_parses_builtins_case_insensitively() {
        assert_eq!(MeshSource::from("Cube".to_string()), MeshSource::Cube);
        assert_eq!(MeshSource::from("sphere".to_string()), MeshSource::Sphere);
        assert_eq!(MeshSource::from("PLANE".to_string()), MeshSource::Plane);
    }

    #[test]
    fn mesh_source_treats_other_strings_as_paths() {
        let m = MeshSource::from("objects/tree/tree.glb".to_string());
        assert_eq!(m, MeshSource::Gltf("objects/tree/tree.glb".into()));
        assert_eq!(String::from(m), "objects/tree/tree.glb");
    }

    #[test]
    fn default_scene_has_two_point_lights() {
        let scene = SceneConfig::default();
        assert_eq!(scene.point_lights.len(), MAX_POINT_LIGHTS);
        assert_eq!(scene.point_lights[0].position, [1.2, 1.2, 1.2]);
        assert_eq!(scene.point_lights[1].quadratic, 0.035);
    }

    #[test]
    fn default_skybox_faces_follow_layer_order() {
        let sky = SkyboxConfig::default();
        assert_eq!(sky.faces.len(), 6);
        assert!(sky.faces[0].ends_with("nightsky_ft.tga"));
        assert!(sky.faces[5].ends_with("nightsky_lf.tga"));
    }

    #[test]
    fn object_table_parses_from_toml() {
        let scene: SceneConfig = toml::from_str(
            r#"
[[objects]]
name = "crate"
mesh = "cube"
position = [1.0, 0.0, -2.0]
color = [0.8, 0.5, 0.2]
"#,
        )
        .unwrap();
        assert_eq!(scene.objects.len(), 1);
        let obj = &scene.objects[0];
        assert_eq!(obj.mesh, MeshSource::Cube);
        assert_eq!(obj.scale, [1.0; 3]);
        assert_eq!(obj.color, Rgb::new(0.8, 0.5, 0.2));
        // Untouched sections keep defaults.
        assert_eq!(scene.point_lights.len(), 2);
    }
}
