//! CPU mirror of the composite shader.

use crate::postprocess::PostProcessParams;

/// Gamma applied when the surface format does not encode sRGB itself.
pub const GAMMA: f32 = 2.2;

/// Combine a scene texel with its blurred bright-pass texel exactly as
/// `composite.wgsl` does.
pub fn tone_map(
    scene: [f32; 3],
    blurred: [f32; 3],
    params: &PostProcessParams,
    apply_gamma: bool,
) -> [f32; 3] {
    std::array::from_fn(|i| {
        let mut c = scene[i];
        if params.bloom {
            c += blurred[i];
        }
        if params.hdr {
            c = 1.0 - (-c * params.exposure).exp();
        }
        if apply_gamma {
            c = c.max(0.0).powf(1.0 / GAMMA);
        }
        c
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(hdr: bool, bloom: bool, exposure: f32) -> PostProcessParams {
        PostProcessParams {
            hdr,
            bloom,
            exposure,
        }
    }

    #[test]
    fn bloom_and_hdr_off_ignores_blur() {
        let p = params(false, false, 1.0);
        let scene = [0.3, 0.6, 0.9];
        assert_eq!(tone_map(scene, [0.0; 3], &p, false), scene);
        assert_eq!(tone_map(scene, [50.0, 7.0, 1.0], &p, false), scene);
    }

    #[test]
    fn hdr_only_also_ignores_blur() {
        let p = params(true, false, 1.0);
        let a = tone_map([2.0; 3], [0.0; 3], &p, false);
        let b = tone_map([2.0; 3], [9.0; 3], &p, false);
        assert_eq!(a, b);
    }

    #[test]
    fn bloom_adds_blur() {
        let p = params(false, true, 1.0);
        assert_eq!(tone_map([0.25; 3], [0.5; 3], &p, false), [0.75; 3]);
    }

    #[test]
    fn hdr_compresses_into_unit_range() {
        let p = params(true, false, 1.0);
        let out = tone_map([14.0, 2.0, 25.0], [0.0; 3], &p, false);
        assert!(out.iter().all(|&c| (0.0..1.0).contains(&c)));
        assert!((out[1] - (1.0 - (-2.0f32).exp())).abs() < 1e-6);
    }

    #[test]
    fn zero_exposure_is_black() {
        let p = params(true, true, 0.0);
        assert_eq!(tone_map([5.0; 3], [5.0; 3], &p, false), [0.0; 3]);
    }

    #[test]
    fn gamma_brightens_midtones() {
        let p = params(false, false, 1.0);
        let out = tone_map([0.5; 3], [0.0; 3], &p, true);
        assert!((out[0] - 0.5f32.powf(1.0 / 2.2)).abs() < 1e-6);
    }
}
