//! Sampling helpers shared by the camera and the drivers.

use lumen_math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform f32 in [0, 1).
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Sample a random point in the unit square [-0.5, 0.5) x [-0.5, 0.5).
pub(crate) fn sample_square(rng: &mut dyn RngCore) -> Vec2 {
    Vec2::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5)
}

/// Sample a random point in the unit disk.
pub(crate) fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec2 {
    loop {
        let p = Vec2::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random stream for one unit of render work.
///
/// With a seed, every `stream` gets its own reproducible generator; without
/// one the generator is seeded from the OS.
pub fn seeded_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_square_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let p = sample_square(&mut rng);
            assert!((-0.5..0.5).contains(&p.x));
            assert!((-0.5..0.5).contains(&p.y));
        }
    }

    #[test]
    fn test_unit_disk_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            assert!(random_in_unit_disk(&mut rng).length() < 1.0);
        }
    }

    #[test]
    fn test_seeded_streams() {
        let a = seeded_rng(Some(42), 3).next_u64();
        let b = seeded_rng(Some(42), 3).next_u64();
        let c = seeded_rng(Some(42), 4).next_u64();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
