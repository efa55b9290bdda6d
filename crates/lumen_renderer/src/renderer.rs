//! Core Whitted-style shading and the progressive renderer.
//!
//! Implements:
//! - Phong lighting (ambient, diffuse, specular) from one directional light
//! - Hard shadows via a shadow ray towards the light
//! - A bounded chain of mirror reflections, averaged into the pixel
//! - Anti-aliasing via multi-sampling

use std::ops::{ControlFlow, Range};
use std::path::Path;

use crate::random::{sample_square, seeded_rng};
use crate::{Camera, Ray, RenderError, RenderResult, Scene};
use lumen_math::{Color, Vec2, Vec3, VectorExt};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum number of reflection bounces after the primary hit
    pub max_reflections: u32,
    /// Offset along the normal (or reflected direction) for secondary rays
    pub shadow_bias: f32,
    /// Rows per band in the parallel renderer
    pub band_rows: u32,
    /// Fixed seed for reproducible sampling; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Jitter samples inside the pixel
    pub jitter: bool,
    /// Take the diffuse color from the surface pattern (`color_at`) instead
    /// of the material
    pub textured_diffuse: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 10,
            max_reflections: 6,
            shadow_bias: 0.0001,
            band_rows: crate::DEFAULT_BAND_ROWS,
            seed: None,
            jitter: true,
            textured_diffuse: false,
        }
    }
}

/// Where a traced ray landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec3,
    pub normal: Vec3,
    /// Copied from the material; decides whether a reflection chain continues
    pub reflective: bool,
}

/// Result of [`trace_ray`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub color: Color,
    /// `None` when the ray escaped to the background
    pub hit: Option<SurfaceHit>,
}

/// Shade the nearest surface along `ray`, or sample the background.
///
/// `eye` is the viewer position used for the specular highlight. Secondary
/// rays pass the camera position too, so highlights seen in reflections are
/// computed for the primary viewpoint.
pub fn trace_ray(ray: &Ray, scene: &Scene, eye: Vec3, config: &RenderConfig) -> Shade {
    let Some((point, object)) = ray.cast(scene.objects()) else {
        return Shade {
            color: scene.background().sample(ray.direction()),
            hit: None,
        };
    };

    let light = scene.light();
    let material = object.material();
    let normal = object.normal_at(point);
    let to_light = light.to_light();

    let ambient = material.ambient * light.ambient;

    let diffuse_intensity = normal.dot(to_light).max(0.0) * light.strength;
    let base = if config.textured_diffuse {
        object.color_at(point)
    } else {
        material.diffuse
    };
    let diffuse = base * light.diffuse * diffuse_intensity;

    let view_dir = (eye - point).unit();
    let reflect_dir = normal * (2.0 * normal.dot(to_light)) - to_light;
    let specular_intensity = view_dir.dot(reflect_dir).max(0.0).powf(material.shininess);
    let specular = material.specular * light.specular * specular_intensity;

    let mut color = ambient + diffuse + specular;

    let shadow_ray = Ray::new(point + normal * config.shadow_bias, to_light);
    if shadow_ray.cast(scene.objects()).is_some() {
        color *= 0.1 / light.strength;
    } else {
        // The lit color is scaled by the cosine term a second time
        color *= normal.dot(to_light * light.strength);
    }

    Shade {
        color,
        hit: Some(SurfaceHit {
            point,
            normal,
            reflective: material.reflective,
        }),
    }
}

/// Color of one camera ray: its own shade plus the mean of its reflections.
///
/// The chain follows mirror bounces for at most `max_reflections` steps and
/// stops at the first bounce that escapes or lands on a non-reflective
/// surface. A chain with no contributing bounce adds nothing.
pub fn sample_color(ray: &Ray, scene: &Scene, eye: Vec3, config: &RenderConfig) -> Color {
    let primary = trace_ray(ray, scene, eye, config);
    let Some(hit) = primary.hit else {
        return primary.color;
    };

    let mut direction = ray.direction().reflect(hit.normal);
    let mut bounce = Ray::new(hit.point + direction * config.shadow_bias, direction);
    let mut reflection = Color::ZERO;
    let mut bounces = 0u32;

    for _ in 0..config.max_reflections {
        let shade = trace_ray(&bounce, scene, eye, config);
        match shade.hit {
            Some(next) if next.reflective => {
                reflection += shade.color;
                bounces += 1;
                direction = bounce.direction().reflect(next.normal);
                bounce = Ray::new(next.point + direction * config.shadow_bias, direction);
            }
            _ => break,
        }
    }

    if bounces == 0 {
        primary.color
    } else {
        primary.color + reflection / bounces as f32
    }
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = config.samples_per_pixel.max(1);
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let offset = if config.jitter {
            sample_square(rng)
        } else {
            Vec2::ZERO
        };
        let pixel = Vec2::new(x as f32, y as f32) + offset;
        let ray = camera.get_direction(pixel, rng);
        pixel_color += sample_color(&ray, scene, camera.position, config);
    }

    // Average the samples
    pixel_color / samples as f32
}

/// Row-major frame of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new frame filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Copy whole rows starting at row `y`.
    pub fn write_rows(&mut self, y: u32, rows: &[Color]) {
        let start = self.index(0, y);
        self.pixels[start..start + rows.len()].copy_from_slice(rows);
    }

    /// Clamped 8-bit RGB image.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.get(x, y).to_rgb())
        })
    }

    /// Save the frame; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_image().save(path).map_err(|source| RenderError::Save {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Saved {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Receives the frame each time a block of rows is finished.
pub trait FrameSink {
    /// `rows` were just completed. Return `Break` to stop rendering.
    fn present(&mut self, frame: &Framebuffer, rows: Range<u32>) -> ControlFlow<()>;
}

impl<F> FrameSink for F
where
    F: FnMut(&Framebuffer, Range<u32>) -> ControlFlow<()>,
{
    fn present(&mut self, frame: &Framebuffer, rows: Range<u32>) -> ControlFlow<()> {
        self(frame, rows)
    }
}

/// A sink that never displays anything and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl FrameSink for Headless {
    fn present(&mut self, _frame: &Framebuffer, _rows: Range<u32>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Final state of a render.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub frame: Framebuffer,
    /// Rows from the top that are complete
    pub rows_done: u32,
    /// The sink asked to stop before the last row
    pub cancelled: bool,
}

/// Render the scene on the calling thread, one row at a time.
///
/// The sink sees the frame after every row and may cancel; cancellation
/// never interrupts a row.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut dyn FrameSink,
) -> RenderOutcome {
    let (width, height) = (camera.image_width(), camera.image_height());
    let mut frame = Framebuffer::new(width, height);
    let mut rng = seeded_rng(config.seed, 0);

    log::info!(
        "Rendering {}x{} @ {} spp, {} reflections, single thread",
        width,
        height,
        config.samples_per_pixel,
        config.max_reflections
    );
    let start = std::time::Instant::now();

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(camera, scene, x, y, config, &mut rng);
            frame.set(x, y, color);
        }

        if sink.present(&frame, y..y + 1).is_break() {
            log::warn!("Render cancelled after {} of {} rows", y + 1, height);
            return RenderOutcome {
                frame,
                rows_done: y + 1,
                cancelled: true,
            };
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    RenderOutcome {
        frame,
        rows_done: height,
        cancelled: false,
    }
}
