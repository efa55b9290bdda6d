//! Infinite horizontal checkered floor.

use crate::{Material, Ray, SceneObject};
use lumen_math::{Color, Interval, Vec3};

/// Pattern period along x and z, in world units.
const PERIOD: i64 = 6;

/// An endless floor at `y = height`, seen from above.
///
/// The pattern splits every 6x6 cell into four 3x3 blocks: the two blocks on
/// the diagonal use `color1`, the other two `color2`.
#[derive(Debug, Clone)]
pub struct InfinityChessBoard {
    height: f32,
    color1: Color,
    color2: Color,
    material: Material,
}

impl InfinityChessBoard {
    /// Create a board with the standard floor material.
    pub fn new(height: f32, color1: Color, color2: Color) -> Self {
        Self {
            height,
            color1,
            color2,
            material: Material::new(
                Color::splat(0.5),
                Color::splat(0.5),
                Color::new(0.0, 0.5, 0.0),
                0.5,
            ),
        }
    }

    /// Replace the floor material. The diffuse color is still taken from
    /// the checker pattern.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Band index of a coordinate inside one period, rounding halves to even.
fn cell(coordinate: f32) -> i64 {
    (coordinate.round_ties_even() as i64).rem_euclid(PERIOD)
}

impl SceneObject for InfinityChessBoard {
    fn intersection(&self, ray: &Ray) -> Option<Vec3> {
        let dy = ray.direction().y;
        if dy >= 0.0 {
            return None;
        }

        let t = (self.height - ray.origin().y) / dy;
        Interval::FORWARD.contains(t).then(|| ray.at(t))
    }

    fn normal_at(&self, _hit: Vec3) -> Vec3 {
        Vec3::Y
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn color_at(&self, hit: Vec3) -> Color {
        let x = cell(hit.x);
        let z = cell(hit.z);
        if (x <= 2 && z <= 2) || (x >= 3 && z >= 3) {
            self.color1
        } else {
            self.color2
        }
    }
}
