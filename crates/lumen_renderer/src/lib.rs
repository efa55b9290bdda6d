//! Lumen Renderer - CPU Whitted-style ray tracing
//!
//! Phong shading from one directional light, hard shadows, a bounded chain of
//! mirror reflections and an environment lookup for rays that escape.
//! Frames are produced row by row (or band by band in parallel) and handed to
//! a [`FrameSink`] that can present them and cancel the render.

mod band;
mod camera;
mod chessboard;
mod error;
mod light;
mod material;
mod object;
mod random;
mod ray;
mod renderer;
mod scene;
mod sky;
mod sphere;

pub use band::{generate_bands, render_band, render_parallel, Band, BandResult, DEFAULT_BAND_ROWS};
pub use camera::Camera;
pub use chessboard::InfinityChessBoard;
pub use error::{RenderError, RenderResult};
pub use light::Light;
pub use material::Material;
pub use object::SceneObject;
pub use random::seeded_rng;
pub use ray::Ray;
pub use renderer::{
    render, render_pixel, sample_color, trace_ray, FrameSink, Framebuffer, Headless,
    RenderConfig, RenderOutcome, Shade, SurfaceHit,
};
pub use scene::Scene;
pub use sky::{Background, SkyGradient, Skybox, SolidBackground};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Interval, Vec2, Vec3, VectorExt};
