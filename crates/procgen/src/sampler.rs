//! Deterministic star placement.
//!
//! Each star's layout derives from (field seed, star index, respawn nonce),
//! so a session layout is reproducible and every respawn of the same slot
//! lands somewhere new.

use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Mix a star's identity into a seed for its RNG stream. SplitMix64-style
/// finalizer over the combined words; the nonce term keeps respawn draws
/// distinct from the initial placement and from each other.
pub fn star_seed(field_seed: u64, index: usize, nonce: u32) -> u64 {
    let mut x = field_seed
        ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (nonce as u64).wrapping_mul(0xD1B5_4A32_D192_ED03);
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    x
}

/// RNG stream for one star's current placement.
pub fn star_rng(field_seed: u64, index: usize, nonce: u32) -> StdRng {
    StdRng::seed_from_u64(star_seed(field_seed, index, nonce))
}

/// Uniform point inside a sphere of `radius`. The cube-root radial keeps
/// the volumetric density uniform instead of clumping toward the center.
pub fn point_in_sphere(rng: &mut impl Rng, radius: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let r = rng.gen::<f32>().cbrt() * radius;
    spherical_to_cartesian(r, phi, theta)
}

/// Uniform point on the surface of a sphere of `radius` (the respawn
/// shell ahead of travel).
pub fn point_on_sphere(rng: &mut impl Rng, radius: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    spherical_to_cartesian(radius, phi, theta)
}

fn spherical_to_cartesian(r: f32, phi: f32, theta: f32) -> Vec3 {
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f32 = 2000.0;

    #[test]
    fn same_identity_same_point() {
        let a = point_in_sphere(&mut star_rng(1, 17, 0), RADIUS);
        let b = point_in_sphere(&mut star_rng(1, 17, 0), RADIUS);
        assert_eq!(a, b);
    }

    #[test]
    fn nonce_changes_the_draw() {
        let a = point_in_sphere(&mut star_rng(1, 17, 0), RADIUS);
        let b = point_in_sphere(&mut star_rng(1, 17, 1), RADIUS);
        assert!((a - b).length() > 1.0);
    }

    #[test]
    fn neighboring_indices_decorrelate() {
        let a = point_in_sphere(&mut star_rng(1, 17, 0), RADIUS);
        let b = point_in_sphere(&mut star_rng(1, 18, 0), RADIUS);
        assert!((a - b).length() > 1.0);
    }

    #[test]
    fn in_sphere_points_stay_inside() {
        for i in 0..5_000 {
            let p = point_in_sphere(&mut star_rng(99, i, 0), RADIUS);
            assert!(p.length() <= RADIUS * (1.0 + 1e-5));
        }
    }

    #[test]
    fn on_sphere_points_sit_on_the_shell() {
        for i in 0..1_000 {
            let p = point_on_sphere(&mut star_rng(99, i, 0), RADIUS);
            assert!((p.length() - RADIUS).abs() < RADIUS * 1e-4);
        }
    }

    /// Uniform volumetric density means (r/R)^3 is uniform on [0, 1]; bin
    /// the cubed radii and check every bin stays near the expected count.
    #[test]
    fn radial_distribution_is_volume_uniform() {
        const SAMPLES: usize = 20_000;
        const BINS: usize = 10;
        let mut counts = [0usize; BINS];
        for i in 0..SAMPLES {
            let p = point_in_sphere(&mut star_rng(1234, i, 0), RADIUS);
            let u = (p.length() / RADIUS).powi(3);
            let bin = ((u * BINS as f32) as usize).min(BINS - 1);
            counts[bin] += 1;
        }
        let expected = SAMPLES / BINS;
        for (bin, count) in counts.iter().enumerate() {
            assert!(
                (*count as i64 - expected as i64).unsigned_abs() < 400,
                "bin {bin}: {count} vs expected {expected}"
            );
        }
    }

    /// Directions should cover all octants, not cluster on an axis.
    #[test]
    fn angular_distribution_covers_octants() {
        const SAMPLES: usize = 8_000;
        let mut counts = [0usize; 8];
        for i in 0..SAMPLES {
            let p = point_on_sphere(&mut star_rng(77, i, 0), 1.0);
            let octant = (p.x >= 0.0) as usize | ((p.y >= 0.0) as usize) << 1
                | ((p.z >= 0.0) as usize) << 2;
            counts[octant] += 1;
        }
        for (octant, count) in counts.iter().enumerate() {
            assert!(
                (*count as i64 - 1000).unsigned_abs() < 250,
                "octant {octant}: {count}"
            );
        }
    }
}
