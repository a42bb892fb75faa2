//! Blur pipeline types.

/// Uniforms for the blur shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlurUniforms {
    /// 1.0 / texture_width, 1.0 / texture_height.
    pub texel_size: [f32; 2],
    pub _padding: [f32; 2],
}

impl BlurUniforms {
    pub fn for_size(width: u32, height: u32) -> Self {
        Self {
            texel_size: [1.0 / width.max(1) as f32, 1.0 / height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

/// Two single-attachment color targets alternately read and written by the
/// blur passes.
pub struct PingPongPair {
    pub textures: [wgpu::Texture; 2],
    pub views: [wgpu::TextureView; 2],
}

impl PingPongPair {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (t0, v0) = crate::postprocess::create_color_target(device, width, height, "blur ping-pong 0");
        let (t1, v1) = crate::postprocess::create_color_target(device, width, height, "blur ping-pong 1");
        Self {
            textures: [t0, t1],
            views: [v0, v1],
        }
    }
}
