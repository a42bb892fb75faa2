//! Texture uploads: the skybox cubemap and model base color textures.
//!
//! Cubemap faces are decoded on the CPU with `image`, then uploaded as the
//! six layers of one cube texture. A face that fails to load stays black; if
//! no face loads at all the cubemap is 1×1 black.

use std::path::{Path, PathBuf};

use crate::gpu::RendererError;

/// Six RGBA8 face images of equal size, in cubemap layer order.
#[derive(Debug, Clone)]
pub struct CubemapImages {
    pub size: u32,
    pub faces: [Vec<u8>; 6],
    /// Number of faces that decoded successfully.
    pub loaded: usize,
}

impl CubemapImages {
    /// Decode up to six face images. Missing entries and failures are logged
    /// with their path and left blank.
    pub fn load(paths: &[PathBuf]) -> Self {
        let mut decoded: [Option<image::RgbaImage>; 6] = Default::default();
        for (slot, path) in decoded.iter_mut().zip(paths) {
            match decode_face(path) {
                Ok(img) => *slot = Some(img),
                Err(e) => tracing::warn!("Cubemap face left blank: {e}"),
            }
        }
        if paths.len() != 6 {
            tracing::warn!("Cubemap expects 6 faces, got {}", paths.len());
        }

        let size = decoded
            .iter()
            .flatten()
            .map(|img| img.width())
            .next()
            .unwrap_or(1);

        let mut loaded = 0;
        let faces = std::array::from_fn(|i| match decoded[i].take() {
            Some(img) if img.width() == size && img.height() == size => {
                loaded += 1;
                img.into_raw()
            }
            Some(img) => {
                tracing::warn!(
                    "Cubemap face {} is {}x{}, expected {size}x{size}; left blank",
                    paths[i].display(),
                    img.width(),
                    img.height()
                );
                blank_face(size)
            }
            None => blank_face(size),
        });

        if loaded == 0 {
            tracing::warn!("No cubemap face loaded, using 1x1 black");
        }
        Self {
            size,
            faces,
            loaded,
        }
    }

    /// Upload as a cube texture with view and sampler.
    pub fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> Cubemap {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("skybox cubemap"),
            size: wgpu::Extent3d {
                width: self.size,
                height: self.size,
                depth_or_array_layers: 6,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (layer, data) in self.faces.iter().enumerate() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: 0,
                        y: 0,
                        z: layer as u32,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                data,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(self.size * 4),
                    rows_per_image: Some(self.size),
                },
                wgpu::Extent3d {
                    width: self.size,
                    height: self.size,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("skybox cubemap view"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            ..Default::default()
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("skybox sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Cubemap {
            texture,
            view,
            sampler,
        }
    }
}

/// A cube texture ready for binding.
pub struct Cubemap {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Upload tightly packed RGBA8 pixels as a sampled sRGB 2D texture.
pub fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Repeat-addressed linear sampler for model textures.
pub fn material_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("material sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

fn decode_face(path: &Path) -> Result<image::RgbaImage, RendererError> {
    let img = image::open(path).map_err(|e| RendererError::asset(path, e))?;
    Ok(img.to_rgba8())
}

fn blank_face(size: u32) -> Vec<u8> {
    let mut data = vec![0u8; (size * size * 4) as usize];
    // opaque black
    for px in data.chunks_exact_mut(4) {
        px[3] = 255;
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, size: u32, rgb: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        let [r, g, b] = rgb;
        let img = image::RgbaImage::from_pixel(size, size, image::Rgba([r, g, b, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn loads_six_faces() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..6)
            .map(|i| write_png(dir.path(), &format!("face{i}.png"), 4, [i as u8 * 10, 0, 0]))
            .collect();

        let cube = CubemapImages::load(&paths);
        assert_eq!(cube.size, 4);
        assert_eq!(cube.loaded, 6);
        assert_eq!(cube.faces[3].len(), 4 * 4 * 4);
        assert_eq!(cube.faces[3][0], 30);
    }

    #[test]
    fn missing_face_is_left_black() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths: Vec<PathBuf> = (0..6)
            .map(|i| write_png(dir.path(), &format!("face{i}.png"), 2, [200, 200, 200]))
            .collect();
        paths[2] = dir.path().join("missing.png");

        let cube = CubemapImages::load(&paths);
        assert_eq!(cube.loaded, 5);
        assert_eq!(cube.faces[2], blank_face(2));
        assert_eq!(cube.faces[0][0], 200);
    }

    #[test]
    fn no_faces_gives_1x1_black() {
        let paths: Vec<PathBuf> = (0..6)
            .map(|i| PathBuf::from(format!("/nonexistent/nightglow/{i}.tga")))
            .collect();
        let cube = CubemapImages::load(&paths);
        assert_eq!(cube.size, 1);
        assert_eq!(cube.loaded, 0);
        assert!(cube.faces.iter().all(|f| f == &[0, 0, 0, 255]));
    }

    #[test]
    fn mismatched_face_size_is_blanked() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths: Vec<PathBuf> = (0..6)
            .map(|i| write_png(dir.path(), &format!("face{i}.png"), 4, [9, 9, 9]))
            .collect();
        paths[5] = write_png(dir.path(), "big.png", 8, [9, 9, 9]);

        let cube = CubemapImages::load(&paths);
        assert_eq!(cube.loaded, 5);
        assert_eq!(cube.faces[5].len(), 4 * 4 * 4);
    }

    #[test]
    fn short_face_list_fills_remaining_with_black() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![write_png(dir.path(), "only.png", 2, [1, 2, 3])];
        let cube = CubemapImages::load(&paths);
        assert_eq!(cube.loaded, 1);
        assert_eq!(cube.faces[4], blank_face(2));
    }
}
