//! Sphere primitive for ray tracing.

use crate::{Material, Ray, SceneObject};
use lumen_math::{Interval, Vec3, VectorExt};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl SceneObject for Sphere {
    fn intersection(&self, ray: &Ray) -> Option<Vec3> {
        // Project the center onto the ray, then measure how far the closest
        // approach is from the center.
        let l = self.center - ray.origin();
        let adj = l.dot(ray.direction());
        let d2 = l.dot(l) - adj * adj;
        let radius2 = self.radius * self.radius;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        let near = adj - thc;
        let far = adj + thc;

        // Origin inside the sphere: the near root is behind us
        let t = if Interval::FORWARD.contains(near) {
            near
        } else if Interval::FORWARD.contains(far) {
            far
        } else {
            return None;
        };

        Some(ray.at(t))
    }

    fn normal_at(&self, hit: Vec3) -> Vec3 {
        (hit - self.center).unit()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
