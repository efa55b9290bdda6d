//! What a ray sees when it leaves the scene.

use std::f32::consts::PI;
use std::path::Path;

use lumen_core::Texture;
use lumen_math::{Color, Vec2, Vec3, VectorExt};

use crate::RenderResult;

/// Environment lookup for rays that hit nothing.
pub trait Background: Send + Sync {
    /// Color seen along a unit `direction`.
    fn sample(&self, direction: Vec3) -> Color;
}

/// The same color in every direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidBackground(pub Color);

impl Background for SolidBackground {
    fn sample(&self, _direction: Vec3) -> Color {
        self.0
    }
}

/// Vertical blend from `horizon` (looking down) to `zenith` (looking up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyGradient {
    pub horizon: Color,
    pub zenith: Color,
}

impl Default for SkyGradient {
    fn default() -> Self {
        Self {
            horizon: Color::ONE,
            zenith: Color::new(0.5, 0.7, 1.0),
        }
    }
}

impl Background for SkyGradient {
    fn sample(&self, direction: Vec3) -> Color {
        let a = 0.5 * (direction.unit().y + 1.0);
        self.horizon * (1.0 - a) + self.zenith * a
    }
}

/// Equirectangular (latitude/longitude) environment image.
///
/// The image center is straight ahead (-Z), the top row straight up.
#[derive(Debug, Clone)]
pub struct Skybox {
    texture: Texture,
}

impl Skybox {
    pub fn new(texture: Texture) -> Self {
        Self { texture }
    }

    /// Load an equirectangular image from disk.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        Ok(Self::new(Texture::load(path)?))
    }

    /// Texture UV of a direction, with (0, 0) at the bottom-left.
    pub fn image_coords(direction: Vec3) -> Vec2 {
        let d = direction.unit();
        let u = 0.5 + d.x.atan2(-d.z) / (2.0 * PI);
        let v = 0.5 + d.y.clamp(-1.0, 1.0).asin() / PI;
        Vec2::new(u, v)
    }
}

impl Background for Skybox {
    fn sample(&self, direction: Vec3) -> Color {
        let uv = Self::image_coords(direction);
        self.texture.sample(uv.x, uv.y)
    }
}
