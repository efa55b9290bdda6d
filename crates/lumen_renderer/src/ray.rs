//! Ray type and nearest-hit search.

use lumen_math::{Vec3, VectorExt};

use crate::SceneObject;

/// A ray with an origin and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    /// Always unit length, or zero for a degenerate ray
    direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is normalized here.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.unit(),
        }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's unit direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Find the object hit closest to the ray origin.
    ///
    /// Every object is tested; the winner is the hit point with the smallest
    /// Euclidean distance from the origin. On equal distances the object that
    /// comes first in `objects` wins. A ray without a direction hits nothing.
    pub fn cast<'a>(
        &self,
        objects: &'a [Box<dyn SceneObject>],
    ) -> Option<(Vec3, &'a dyn SceneObject)> {
        if self.direction == Vec3::ZERO {
            return None;
        }

        let mut nearest: Option<(Vec3, &'a dyn SceneObject, f32)> = None;

        for object in objects {
            let Some(point) = object.intersection(self) else {
                continue;
            };
            let distance = point.distance(self.origin);
            if nearest.map_or(true, |(_, _, closest)| distance < closest) {
                nearest = Some((point, object.as_ref(), distance));
            }
        }

        nearest.map(|(point, object, _)| (point, object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use lumen_math::Color;

    fn sphere_at(z: f32, diffuse: Color) -> Box<dyn SceneObject> {
        Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, z),
            1.0,
            Material::new(diffuse, Color::ONE, Color::splat(0.1), 32.0),
        ))
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 3.0, 4.0));
        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cast_picks_nearest() {
        let red = Color::new(1.0, 0.0, 0.0);
        let green = Color::new(0.0, 1.0, 0.0);
        // Far sphere first in the list
        let objects = vec![sphere_at(-10.0, red), sphere_at(-5.0, green)];

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let (point, object) = ray.cast(&objects).unwrap();

        assert!((point - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-4);
        assert_eq!(object.material().diffuse, green);
    }

    #[test]
    fn test_cast_tie_keeps_first() {
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        let objects = vec![sphere_at(-5.0, red), sphere_at(-5.0, blue)];

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let (_, object) = ray.cast(&objects).unwrap();
        assert_eq!(object.material().diffuse, red);
    }

    #[test]
    fn test_cast_misses() {
        let objects = vec![sphere_at(-5.0, Color::ONE)];

        assert!(Ray::new(Vec3::ZERO, Vec3::Y).cast(&objects).is_none());
        assert!(Ray::new(Vec3::ZERO, Vec3::NEG_Z).cast(&[]).is_none());
    }

    #[test]
    fn test_degenerate_ray_hits_nothing() {
        // Origin inside the sphere would otherwise report a hit
        let objects = vec![sphere_at(0.0, Color::ONE)];
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);

        assert_eq!(ray.direction(), Vec3::ZERO);
        assert!(ray.cast(&objects).is_none());
    }
}
