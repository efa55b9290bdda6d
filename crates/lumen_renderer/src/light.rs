//! The single directional light of a scene.

use lumen_math::{Color, Vec3, VectorExt};

/// A directional light, like the sun.
///
/// `strength` must be non-zero: shadowed surfaces are scaled by
/// `0.1 / strength`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Direction the light travels in (unit length)
    direction: Vec3,
    pub strength: f32,
    pub diffuse: Color,
    pub specular: Color,
    pub ambient: Color,
}

impl Light {
    /// Create a light travelling along `direction` (normalized here).
    pub fn new(
        direction: Vec3,
        strength: f32,
        diffuse: Color,
        specular: Color,
        ambient: Color,
    ) -> Self {
        Self {
            direction: direction.unit(),
            strength,
            diffuse,
            specular,
            ambient,
        }
    }

    /// Unit direction the light travels in.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit direction from a surface towards the light.
    pub fn to_light(&self) -> Vec3 {
        -self.direction
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(
            Vec3::new(-1.0, -1.0, -1.0),
            1.0,
            Color::ONE,
            Color::ONE,
            Color::splat(0.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_normalized() {
        let light = Light::new(
            Vec3::new(0.0, -4.0, 0.0),
            1.0,
            Color::ONE,
            Color::ONE,
            Color::ZERO,
        );
        assert_eq!(light.direction(), Vec3::NEG_Y);
        assert_eq!(light.to_light(), Vec3::Y);
    }
}
