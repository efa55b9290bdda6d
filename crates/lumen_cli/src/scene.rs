//! The built-in demo scene: three spheres over a checkered floor.

use lumen_math::{Color, Vec2, Vec3};
use lumen_renderer::{
    Camera, InfinityChessBoard, Light, Material, Scene, SkyGradient, Skybox, Sphere,
};

use crate::cli::Args;

fn glossy(diffuse: Color) -> Material {
    Material::new(diffuse, Color::ONE, Color::splat(0.1), 32.0)
}

const SPHERES: [(Vec3, Color); 3] = [
    (Vec3::new(0.0, 2.0, -10.0), Color::new(1.0, 0.0, 0.0)),
    (Vec3::new(5.0, 2.0, -15.0), Color::new(0.0, 1.0, 0.0)),
    (Vec3::new(-5.0, 0.0, -15.0), Color::new(0.0, 0.0, 1.0)),
];

fn add_objects(mut scene: Scene) -> Scene {
    for (center, color) in SPHERES {
        scene.add(Box::new(Sphere::new(center, 2.0, glossy(color))));
    }
    scene.add(Box::new(InfinityChessBoard::new(-2.0, Color::ZERO, Color::ONE)));
    scene
}

/// Build the demo scene, lit from above-front-right.
pub fn demo_scene(skybox: Option<Skybox>) -> Scene {
    let light = Light::new(
        Vec3::new(-1.0, -1.0, -1.0),
        1.0,
        Color::ONE,
        Color::ONE,
        Color::splat(0.2),
    );

    let scene = match skybox {
        Some(skybox) => Scene::new(light, skybox),
        None => Scene::new(light, SkyGradient::default()),
    };
    add_objects(scene)
}

/// Camera five units in front of the origin, lens settings from the flags.
pub fn demo_camera(args: &Args) -> Camera {
    Camera::new(
        Vec3::new(0.0, 0.0, 5.0),
        Vec2::new(args.width as f32, args.height as f32),
    )
    .with_lens(args.fov, args.focus_distance, args.aperture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use lumen_renderer::Ray;

    #[test]
    fn test_demo_scene_contents() {
        let scene = demo_scene(None);
        assert_eq!(scene.len(), 4);
        assert!((scene.light().direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_looking_down_hits_floor() {
        let scene = demo_scene(None);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, -1.0, -0.2));
        let (point, object) = ray.cast(scene.objects()).unwrap();

        assert!((point.y + 2.0).abs() < 1e-4);
        assert_eq!(object.normal_at(point), Vec3::Y);
    }

    #[test]
    fn test_demo_camera_from_args() {
        let args = Args::parse_from([
            "lumen",
            "--width",
            "320",
            "--height",
            "200",
            "--aperture",
            "0",
        ]);
        let camera = demo_camera(&args);

        assert_eq!((camera.image_width(), camera.image_height()), (320, 200));
        assert_eq!(camera.aperture, 0.0);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
    }
}
