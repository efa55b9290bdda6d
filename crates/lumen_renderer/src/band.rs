//! Band-based parallel rendering.
//!
//! Splits the image into horizontal bands of whole rows that are rendered
//! independently with rayon, then presented top to bottom.

use std::ops::Range;

use rayon::prelude::*;

use crate::random::seeded_rng;
use crate::renderer::render_pixel;
use crate::{Camera, Color, FrameSink, Framebuffer, RenderConfig, RenderOutcome, Scene};
use rand::RngCore;

/// A horizontal strip of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First row of the band
    pub y: u32,
    /// Width of the band in pixels (the image width)
    pub width: u32,
    /// Number of rows in the band
    pub height: u32,
    /// Position of this band from the top, also its random stream id
    pub index: usize,
}

impl Band {
    /// Create a new band.
    pub fn new(y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            y,
            width,
            height,
            index,
        }
    }

    /// Rows covered by this band.
    pub fn rows(&self) -> Range<u32> {
        self.y..self.y + self.height
    }

    /// Get the total number of pixels in this band.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default band height in rows.
pub const DEFAULT_BAND_ROWS: u32 = 8;

/// Split an image into bands of `band_rows` rows; the last may be shorter.
pub fn generate_bands(width: u32, height: u32, band_rows: u32) -> Vec<Band> {
    let band_rows = band_rows.max(1);

    (0..height)
        .step_by(band_rows as usize)
        .enumerate()
        .map(|(index, y)| Band::new(y, width, band_rows.min(height - y), index))
        .collect()
}

/// Render a single band to a vector of colors.
///
/// Returns pixels in row-major order within the band.
pub fn render_band(
    band: &Band,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(band.pixel_count() as usize);

    for y in band.rows() {
        for x in 0..band.width {
            pixels.push(render_pixel(camera, scene, x, y, config, rng));
        }
    }

    pixels
}

/// Result of rendering a band.
#[derive(Debug, Clone)]
pub struct BandResult {
    /// The band that was rendered
    pub band: Band,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BandResult {
    /// Create a new band result.
    pub fn new(band: Band, pixels: Vec<Color>) -> Self {
        Self { band, pixels }
    }
}

/// Render the scene on the rayon pool.
///
/// Bands are rendered in waves of one band per worker thread. After each
/// wave the bands are copied into the frame and presented in order; the sink
/// can cancel between bands. Every band draws from its own random stream, so
/// a seeded render does not depend on scheduling.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut dyn FrameSink,
) -> RenderOutcome {
    let (width, height) = (camera.image_width(), camera.image_height());
    let mut frame = Framebuffer::new(width, height);
    let bands = generate_bands(width, height, config.band_rows);
    let wave_size = rayon::current_num_threads().max(1);

    log::info!(
        "Rendering {}x{} @ {} spp, {} reflections, {} bands on {} threads",
        width,
        height,
        config.samples_per_pixel,
        config.max_reflections,
        bands.len(),
        wave_size
    );
    let start = std::time::Instant::now();

    for wave in bands.chunks(wave_size) {
        let results: Vec<BandResult> = wave
            .par_iter()
            .map(|band| {
                let mut rng = seeded_rng(config.seed, band.index as u64);
                let pixels = render_band(band, camera, scene, config, &mut rng);
                BandResult::new(*band, pixels)
            })
            .collect();

        log::debug!(
            "Finished bands {}..={}",
            wave[0].index,
            wave[wave.len() - 1].index
        );

        for result in results {
            frame.write_rows(result.band.y, &result.pixels);
            let rows = result.band.rows();
            if sink.present(&frame, rows.clone()).is_break() {
                log::warn!("Render cancelled after {} of {} rows", rows.end, height);
                return RenderOutcome {
                    frame,
                    rows_done: rows.end,
                    cancelled: true,
                };
            }
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    RenderOutcome {
        frame,
        rows_done: height,
        cancelled: false,
    }
}
