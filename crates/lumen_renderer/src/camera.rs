//! Camera for ray generation.

use crate::random::random_in_unit_disk;
use crate::Ray;
use lumen_math::{Vec2, Vec3, VectorExt};
use rand::RngCore;

/// A thin-lens camera looking down -Z with +Y up.
///
/// Pixel rows grow downwards, so pixel `y` is flipped when it becomes a
/// world direction. `aperture` must not be negative; zero makes a pinhole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Screen size in pixels (width, height)
    pub screen_size: Vec2,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Distance from the camera to the plane of perfect focus
    pub focus_distance: f32,
    /// Lens diameter; rays start anywhere within `aperture / 2` of `position`
    pub aperture: f32,
}

impl Camera {
    /// Create a camera with a 60 degree field of view and a small lens.
    pub fn new(position: Vec3, screen_size: Vec2) -> Self {
        Self {
            position,
            screen_size,
            fov: 60.0,
            focus_distance: 10.0,
            aperture: 0.1,
        }
    }

    /// Set lens settings.
    pub fn with_lens(mut self, fov: f32, focus_distance: f32, aperture: f32) -> Self {
        self.fov = fov;
        self.focus_distance = focus_distance;
        self.aperture = aperture;
        self
    }

    /// Switch to a pinhole (no depth of field).
    pub fn pinhole(mut self) -> Self {
        self.aperture = 0.0;
        self
    }

    pub fn image_width(&self) -> u32 {
        self.screen_size.x as u32
    }

    pub fn image_height(&self) -> u32 {
        self.screen_size.y as u32
    }

    /// Distance from the eye to the virtual screen, in pixels.
    fn screen_distance(&self) -> f32 {
        self.screen_size.y / (self.fov.to_radians() / 2.0).tan()
    }

    /// Generate the ray through a (possibly fractional) pixel coordinate.
    ///
    /// The pinhole path never touches `rng`.
    pub fn get_direction(&self, pixel: Vec2, rng: &mut dyn RngCore) -> Ray {
        let xy = pixel - self.screen_size / 2.0;
        let direction = Vec3::new(xy.x, -xy.y, -self.screen_distance()).unit();

        if self.aperture <= 0.0 {
            return Ray::new(self.position, direction);
        }

        // Every lens sample aims at the point this pixel focuses on
        let focal_point = self.position + direction * self.focus_distance;
        let lens = random_in_unit_disk(rng) * (self.aperture / 2.0);
        let origin = self.position + Vec3::new(lens.x, lens.y, 0.0);

        Ray::new(origin, focal_point - origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn camera() -> Camera {
        let screen = Vec2::new(200.0, 100.0);
        Camera::new(Vec3::ZERO, screen).with_lens(60.0, 10.0, 0.5)
    }

    #[test]
    fn test_center_ray_looks_forward() {
        let mut rng = StdRng::seed_from_u64(42);
        let cam = camera().pinhole();
        let ray = cam.get_direction(Vec2::new(100.0, 50.0), &mut rng);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_top_rows_look_up() {
        let mut rng = StdRng::seed_from_u64(42);
        let cam = camera().pinhole();

        let top = cam.get_direction(Vec2::new(100.0, 0.0), &mut rng);
        let bottom = cam.get_direction(Vec2::new(100.0, 99.0), &mut rng);
        let right = cam.get_direction(Vec2::new(199.0, 50.0), &mut rng);

        assert!(top.direction().y > 0.0);
        assert!(bottom.direction().y < 0.0);
        assert!(right.direction().x > 0.0);
    }

    #[test]
    fn test_screen_distance_from_fov() {
        let screen = Vec2::new(100.0, 100.0);
        let cam = Camera::new(Vec3::ZERO, screen).with_lens(90.0, 1.0, 0.0);
        assert!((cam.screen_distance() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_pinhole_is_deterministic() {
        let cam = camera().pinhole();
        let mut used = StdRng::seed_from_u64(9);
        let mut untouched = StdRng::seed_from_u64(9);
        let pixel = Vec2::new(13.25, 71.5);

        let a = cam.get_direction(pixel, &mut used);
        let b = cam.get_direction(pixel, &mut used);
        assert_eq!(a, b);

        // No random numbers were drawn
        assert_eq!(used.next_u64(), untouched.next_u64());
    }

    #[test]
    fn test_aperture_origins_stay_on_lens() {
        let cam = Camera {
            position: Vec3::new(1.0, 2.0, 5.0),
            ..camera()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut spread: f32 = 0.0;

        for _ in 0..2000 {
            let ray = cam.get_direction(Vec2::new(40.0, 60.0), &mut rng);
            let offset = ray.origin() - cam.position;
            assert!(offset.length() <= cam.aperture / 2.0 + 1e-6);
            assert_eq!(offset.z, 0.0);
            spread = spread.max(offset.length());
        }

        // Samples actually cover the lens
        assert!(spread > cam.aperture / 4.0);
    }

    #[test]
    fn test_aperture_rays_meet_at_focus() {
        let cam = camera();
        let mut rng = StdRng::seed_from_u64(5);
        let pixel = Vec2::new(150.0, 20.0);
        let center = cam.pinhole().get_direction(pixel, &mut rng);
        let focal = center.at(cam.focus_distance);

        for _ in 0..100 {
            let ray = cam.get_direction(pixel, &mut rng);
            let t = (focal - ray.origin()).length();
            assert!((ray.at(t) - focal).length() < 1e-3);
        }
    }

    /// Largest distance from the mean where sample rays cross `z = -depth`.
    fn blur_radius(cam: &Camera, depth: f32, rng: &mut StdRng) -> f32 {
        let points: Vec<Vec2> = (0..500)
            .map(|_| {
                let ray = cam.get_direction(Vec2::new(100.0, 50.0), rng);
                let t = (-depth - ray.origin().z) / ray.direction().z;
                let p = ray.at(t);
                Vec2::new(p.x, p.y)
            })
            .collect();
        let mean = points.iter().copied().sum::<Vec2>() / points.len() as f32;
        points.iter().map(|p| (*p - mean).length()).fold(0.0, f32::max)
    }

    #[test]
    fn test_defocus_grows_away_from_focal_plane() {
        let cam = camera();
        let mut rng = StdRng::seed_from_u64(11);

        let in_focus = blur_radius(&cam, 10.0, &mut rng);
        let near = blur_radius(&cam, 5.0, &mut rng);
        let far = blur_radius(&cam, 20.0, &mut rng);
        let farther = blur_radius(&cam, 40.0, &mut rng);

        assert!(in_focus < 1e-3, "in focus blur {in_focus}");
        assert!(near > in_focus);
        assert!(far > in_focus);
        assert!(farther > far);
    }
}
