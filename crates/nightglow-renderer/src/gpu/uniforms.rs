//! GPU uniform buffer types shared across the scene shaders.
//!
//! `FrameUniforms` is uploaded once per frame and read by every pipeline in
//! the capture pass. `ObjectUniforms` is written once at startup, one slot per
//! draw, and selected with a dynamic offset. `MaterialUniforms` sits in each
//! model part's material bind group.

use nightglow_config::schema::{
    DirectionalLightConfig, PointLightConfig, SceneConfig, MAX_POINT_LIGHTS,
};

use crate::camera::Camera;

/// Directional light, four `vec4` rows (64 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirLightUniform {
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

impl DirLightUniform {
    pub fn from_config(light: &DirectionalLightConfig) -> Self {
        let [x, y, z] = light.direction;
        Self {
            direction: [x, y, z, 0.0],
            ambient: light.ambient.to_rgba(1.0),
            diffuse: light.diffuse.to_rgba(1.0),
            specular: light.specular.to_rgba(1.0),
        }
    }
}

/// Point light, five `vec4` rows (80 bytes).
///
/// `attenuation` packs `(constant, linear, quadratic, unused)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub attenuation: [f32; 4],
}

impl PointLightUniform {
    pub fn from_config(light: &PointLightConfig) -> Self {
        let [x, y, z] = light.position;
        Self {
            position: [x, y, z, 1.0],
            ambient: light.ambient.to_rgba(1.0),
            diffuse: light.diffuse.to_rgba(1.0),
            specular: light.specular.to_rgba(1.0),
            attenuation: [light.constant, light.linear, light.quadratic, 0.0],
        }
    }
}

/// GPU-side uniform buffer matching the WGSL `Frame` struct.
///
/// Layout: 3 × mat4 + 1 vec4 + dir light + 2 point lights + params = 448 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// View matrix with the translation removed, for the skybox.
    pub sky_view: [[f32; 4]; 4],
    pub view_position: [f32; 4],
    pub dir_light: DirLightUniform,
    pub point_lights: [PointLightUniform; MAX_POINT_LIGHTS],
    /// `(shininess, bright_threshold, point_light_count, unused)`.
    pub params: [f32; 4],
}

impl FrameUniforms {
    /// Build the static lighting part from the scene config. Camera fields
    /// start as identity and are filled by [`Self::set_camera`].
    pub fn from_scene(scene: &SceneConfig, bright_threshold: f32) -> Self {
        let mut point_lights = [PointLightUniform::default(); MAX_POINT_LIGHTS];
        let count = scene.point_lights.len().min(MAX_POINT_LIGHTS);
        for (slot, light) in point_lights.iter_mut().zip(&scene.point_lights) {
            *slot = PointLightUniform::from_config(light);
        }

        let identity = glam::Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            projection: identity,
            sky_view: identity,
            view_position: [0.0, 0.0, 0.0, 1.0],
            dir_light: DirLightUniform::from_config(&scene.directional_light),
            point_lights,
            params: [scene.shininess, bright_threshold, count as f32, 0.0],
        }
    }

    /// Update view, projection and eye position for this frame.
    pub fn set_camera(&mut self, camera: &Camera, aspect: f32) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = camera.projection_matrix(aspect).to_cols_array_2d();
        self.sky_view = camera.sky_view_matrix().to_cols_array_2d();
        self.view_position = camera.position.extend(1.0).to_array();
    }

    pub fn point_light_count(&self) -> usize {
        self.params[2] as usize
    }
}

/// Per-draw uniform block matching the WGSL `Object` struct (160 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model matrix, for normals.
    pub normal_matrix: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    /// Output color of the emissive pipeline; ignored by the lit pipeline.
    pub emissive: [f32; 4],
}

impl ObjectUniforms {
    pub fn new(model: glam::Mat4, base_color: [f32; 3]) -> Self {
        let [r, g, b] = base_color;
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            base_color: [r, g, b, 1.0],
            emissive: [0.0; 4],
        }
    }

    pub fn emissive(model: glam::Mat4, color: [f32; 3]) -> Self {
        let [r, g, b] = color;
        Self {
            emissive: [r, g, b, 1.0],
            ..Self::new(model, [1.0; 3])
        }
    }
}

/// Per-material block matching the WGSL `Material` struct (16 bytes).
///
/// `params.x` is the alpha cutoff; the rest is padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniforms {
    pub params: [f32; 4],
}

impl MaterialUniforms {
    pub fn new(alpha_cutoff: f32) -> Self {
        Self {
            params: [alpha_cutoff, 0.0, 0.0, 0.0],
        }
    }
}

/// Round `size` up to the device's dynamic-offset alignment.
pub fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightglow_config::schema::CameraConfig;

    #[test]
    fn frame_uniforms_is_448_bytes() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 448);
    }

    #[test]
    fn light_uniform_sizes() {
        assert_eq!(std::mem::size_of::<DirLightUniform>(), 64);
        assert_eq!(std::mem::size_of::<PointLightUniform>(), 80);
    }

    #[test]
    fn object_uniforms_is_160_bytes() {
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 160);
    }

    #[test]
    fn material_uniforms_is_16_bytes() {
        assert_eq!(std::mem::size_of::<MaterialUniforms>(), 16);
        assert_eq!(MaterialUniforms::new(0.1).params, [0.1, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<ObjectUniforms>() % 16, 0);
    }

    #[test]
    fn from_scene_copies_lights_and_params() {
        let scene = SceneConfig::default();
        let u = FrameUniforms::from_scene(&scene, 1.0);
        assert_eq!(u.params[0], 32.0);
        assert_eq!(u.params[1], 1.0);
        assert_eq!(u.point_light_count(), 2);
        assert_eq!(u.point_lights[0].position, [1.2, 1.2, 1.2, 1.0]);
        assert_eq!(u.point_lights[1].attenuation, [1.0, 0.10, 0.035, 0.0]);
        assert_eq!(u.dir_light.direction, [-0.2, -0.1, 0.3, 0.0]);
    }

    #[test]
    fn from_scene_with_one_light_leaves_second_zeroed() {
        let mut scene = SceneConfig::default();
        scene.point_lights.truncate(1);
        let u = FrameUniforms::from_scene(&scene, 1.0);
        assert_eq!(u.point_light_count(), 1);
        assert_eq!(u.point_lights[1].position, [0.0; 4]);
    }

    #[test]
    fn set_camera_writes_eye_position() {
        let mut u = FrameUniforms::from_scene(&SceneConfig::default(), 1.0);
        let camera = Camera::from_config(&CameraConfig::default());
        u.set_camera(&camera, 4.0 / 3.0);
        assert_eq!(u.view_position, [4.0, 5.0, 6.0, 1.0]);
        // sky_view drops translation: last column is (0, 0, 0, 1)
        assert_eq!(u.sky_view[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn object_normal_matrix_for_uniform_scale_is_scaled_identity() {
        let model = glam::Mat4::from_scale(glam::Vec3::splat(2.0));
        let u = ObjectUniforms::new(model, [1.0, 0.5, 0.25]);
        assert!((u.normal_matrix[0][0] - 0.5).abs() < 1e-6);
        assert_eq!(u.base_color, [1.0, 0.5, 0.25, 1.0]);
        assert_eq!(u.emissive, [0.0; 4]);
    }

    #[test]
    fn emissive_object_carries_color() {
        let u = ObjectUniforms::emissive(glam::Mat4::IDENTITY, [14.0, 2.0, 25.0]);
        assert_eq!(u.emissive, [14.0, 2.0, 25.0, 1.0]);
    }

    #[test]
    fn aligned_stride_rounds_up() {
        assert_eq!(aligned_stride(160, 256), 256);
        assert_eq!(aligned_stride(256, 256), 256);
        assert_eq!(aligned_stride(300, 256), 512);
        assert_eq!(aligned_stride(160, 0), 160);
    }
}
