//! The capability set every scene primitive provides.

use lumen_math::{Color, Vec3};

use crate::{Material, Ray};

/// Trait for primitives that can be placed in a [`crate::Scene`].
pub trait SceneObject: Send + Sync {
    /// Nearest point where `ray` meets this object at or in front of its
    /// origin, or `None` on a miss.
    fn intersection(&self, ray: &Ray) -> Option<Vec3>;

    /// Unit surface normal at a point returned by [`Self::intersection`].
    fn normal_at(&self, hit: Vec3) -> Vec3;

    /// Lighting coefficients of the surface.
    fn material(&self) -> &Material;

    /// Diffuse color at `hit`. Uniform objects use the material's diffuse.
    fn color_at(&self, _hit: Vec3) -> Color {
        self.material().diffuse
    }
}
