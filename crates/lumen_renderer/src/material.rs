//! Phong surface coefficients.

use lumen_math::Color;

/// How a surface responds to the scene light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Multiplied with the light's ambient color
    pub ambient: Color,
    /// Multiplied with the light's diffuse color and the cosine term
    pub diffuse: Color,
    /// Multiplied with the light's specular color and the highlight term
    pub specular: Color,
    /// Phong exponent; larger is a tighter highlight
    pub shininess: f32,
    /// Whether reflection rays that land here keep bouncing and contribute
    pub reflective: bool,
}

impl Material {
    /// Create a reflective material.
    pub fn new(diffuse: Color, specular: Color, ambient: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            reflective: true,
        }
    }

    /// Set whether reflection chains continue through this surface.
    pub fn with_reflective(mut self, reflective: bool) -> Self {
        self.reflective = reflective;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::splat(0.5), Color::ONE, Color::splat(0.1), 32.0)
    }
}
