//! Material bind groups: group 2 of the lit and emissive pipelines.
//!
//! Untextured parts and built-in shapes bind a shared 1×1 white texture, so
//! the shader samples unconditionally.

use wgpu::util::DeviceExt;

use crate::gpu::MaterialUniforms;
use crate::model::{ModelImage, PartMaterial};
use crate::texture::{material_sampler, upload_rgba};

pub(super) struct MaterialFactory {
    sampler: wgpu::Sampler,
    white: wgpu::TextureView,
}

impl MaterialFactory {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self {
            sampler: material_sampler(device),
            white: upload_rgba(device, queue, "default white", 1, 1, &[255; 4]),
        }
    }

    pub fn bind_group(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        material: &PartMaterial,
        image: Option<&ModelImage>,
    ) -> wgpu::BindGroup {
        let uniforms = MaterialUniforms::new(material.alpha_cutoff);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let texture =
            image.map(|img| upload_rgba(device, queue, label, img.width, img.height, &img.rgba));

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(
                        texture.as_ref().unwrap_or(&self.white),
                    ),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        })
    }
}
