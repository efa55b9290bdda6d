use crate::{Interval, Vec3};

/// Ray tracing helpers on top of `glam::Vec3`.
///
/// Mirroring about a normal is glam's own `Vec3::reflect`.
pub trait VectorExt: Sized {
    /// Unit vector in the same direction.
    ///
    /// A zero (or non-finite) vector has no direction; it maps to `Vec3::ZERO`
    /// instead of producing NaNs.
    fn unit(self) -> Self;

    /// 8-bit color triple, each channel clamped to [0, 1] first.
    fn to_rgb(self) -> [u8; 3];
}

impl VectorExt for Vec3 {
    #[inline]
    fn unit(self) -> Self {
        self.normalize_or_zero()
    }

    fn to_rgb(self) -> [u8; 3] {
        let channel = |c: f32| (255.0 * Interval::UNIT.clamp(c)) as u8;
        [channel(self.x), channel(self.y), channel(self.z)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let n = Vec3::Y;
        let r = v.reflect(n);

        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_reflect_law() {
        let normals = [
            Vec3::Y,
            Vec3::new(1.0, 2.0, -3.0).normalize(),
            Vec3::new(-0.3, 0.1, 0.9).normalize(),
        ];
        let vectors = [
            Vec3::new(0.5, -0.5, 0.7).normalize(),
            Vec3::new(-2.0, 0.3, 1.0).normalize(),
            Vec3::Z,
        ];

        for n in normals {
            for v in vectors {
                let r = v.reflect(n);
                assert!((r.length() - v.length()).abs() < 1e-5);
                assert!((r.dot(n) + v.dot(n)).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_unit() {
        let v = Vec3::new(3.0, 0.0, 4.0).unit();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_unit_of_zero_is_zero() {
        assert_eq!(Vec3::ZERO.unit(), Vec3::ZERO);
    }

    #[test]
    fn test_to_rgb_clamps() {
        assert_eq!(Vec3::new(0.0, 0.5, 1.0).to_rgb(), [0, 127, 255]);
        assert_eq!(Vec3::new(-1.0, 2.0, 1.5).to_rgb(), [0, 255, 255]);
    }
}
