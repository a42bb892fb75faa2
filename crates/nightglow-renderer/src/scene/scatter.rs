//! Seeded pseudo-random placement on the XZ plane.

use glam::Vec3;
use nightglow_config::schema::ScatterConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Positions for every instance of a scatter set. The same config always
/// yields the same positions.
pub fn scatter_positions(config: &ScatterConfig) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| {
            let x = sample(&mut rng, config.x_range);
            let z = sample(&mut rng, config.z_range);
            Vec3::new(x, config.y, z)
        })
        .collect()
}

fn sample(rng: &mut StdRng, [min, max]: [f32; 2]) -> f32 {
    if min < max {
        rng.gen_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_positions() {
        let config = ScatterConfig::default();
        assert_eq!(scatter_positions(&config), scatter_positions(&config));
    }

    #[test]
    fn different_seed_different_positions() {
        let a = ScatterConfig::default();
        let b = ScatterConfig {
            seed: a.seed + 1,
            ..a.clone()
        };
        assert_ne!(scatter_positions(&a), scatter_positions(&b));
    }

    #[test]
    fn positions_stay_in_range() {
        let config = ScatterConfig::default();
        let positions = scatter_positions(&config);
        assert_eq!(positions.len(), 100);
        for p in positions {
            assert!((-199.0..51.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((-200.0..0.0).contains(&p.z), "z out of range: {}", p.z);
            assert_eq!(p.y, -1.0);
        }
    }

    #[test]
    fn empty_range_uses_min() {
        let config = ScatterConfig {
            count: 3,
            x_range: [5.0, 5.0],
            ..Default::default()
        };
        assert!(scatter_positions(&config).iter().all(|p| p.x == 5.0));
    }

    #[test]
    fn zero_count_is_empty() {
        let config = ScatterConfig {
            count: 0,
            ..Default::default()
        };
        assert!(scatter_positions(&config).is_empty());
    }
}
