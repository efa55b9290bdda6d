//! Image textures for environment lookups.
//!
//! Pixels are kept as display-referred RGB floats in [0, 1]. The renderer
//! shades in the same space and writes the frame without a transfer curve,
//! so no sRGB decode happens on load.

use std::path::Path;

use lumen_math::{Color, Vec3};
use thiserror::Error;

/// Errors that can occur during texture loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture {0} has no pixels")]
    Empty(String),

    #[error("Texture data has {actual} pixels, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A loaded texture with pixel data.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    /// Row-major RGB, top row first
    pub pixels: Vec<Color>,

    /// Source file path, kept for log messages
    pub path: String,
}

impl Texture {
    /// Create a texture from pixel data.
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<Color>,
        path: impl Into<String>,
    ) -> TextureResult<Self> {
        let path = path.into();
        let expected = width as usize * height as usize;
        if expected == 0 {
            return Err(TextureError::Empty(path));
        }
        if pixels.len() != expected {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            path,
        })
    }

    /// Load an image file (any format the `image` crate decodes).
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let img = image::open(path).map_err(|source| TextureError::Load {
            path: display.clone(),
            source,
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb
            .pixels()
            .map(|p| Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32) / 255.0)
            .collect();

        let texture = Self::new(width, height, pixels, display)?;

        log::debug!(
            "Loaded texture: {} ({}x{}, {:.1} KB)",
            texture.path,
            texture.width,
            texture.height,
            texture.size_bytes() as f32 / 1024.0
        );

        Ok(texture)
    }

    /// Sample the texture at UV coordinates (bilinear filtering).
    ///
    /// UV coordinates are in [0, 1] range, with (0, 0) at bottom-left.
    /// `u` wraps around horizontally; `v` is clamped so both poles map to
    /// their own edge row.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let u = u.rem_euclid(1.0);
        let v = v.clamp(0.0, 1.0);

        let x = u * (self.width as f32 - 1.0);
        let y = (1.0 - v) * (self.height as f32 - 1.0); // Flip V for image rows

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x.fract();
        let fy = y.fract();

        let top = self.get_pixel(x0, y0).lerp(self.get_pixel(x1, y0), fx);
        let bottom = self.get_pixel(x0, y1).lerp(self.get_pixel(x1, y1), fx);

        top.lerp(bottom, fy)
    }

    /// Get pixel at integer coordinates (black outside the image).
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied().unwrap_or(Color::ZERO)
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Color>()
    }
}
