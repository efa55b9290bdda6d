use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::RenderConfig;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Image formats the frame can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "A small Whitted-style ray tracer")]
pub struct Args {
    /// Set the logging level (RUST_LOG overrides it)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = 1440)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 850)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum reflection bounces after the primary hit
    #[arg(long)]
    pub max_reflections: Option<u32>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shade the floor's diffuse term with its checker pattern
    #[arg(long)]
    pub textured_diffuse: bool,

    /// JSON file with render settings; other flags override it
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Equirectangular skybox image (a gradient sky is used without one)
    #[arg(long)]
    pub skybox: Option<PathBuf>,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f32,

    /// Distance to the plane of perfect focus
    #[arg(long, default_value_t = 15.0)]
    pub focus_distance: f32,

    /// Lens diameter; 0 renders with a pinhole
    #[arg(long, default_value_t = 0.5)]
    pub aperture: f32,

    /// Worker threads (1 renders on the main thread)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Directory the timestamped image is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Output image format
    #[arg(long, value_enum, default_value = "png")]
    pub format: ImageFormat,
}

impl Args {
    /// Settings file (or defaults) with command line overrides applied.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.settings {
            Some(path) => load_settings(path)?,
            None => RenderConfig::default(),
        };

        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(max_reflections) = self.max_reflections {
            config.max_reflections = max_reflections;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.textured_diffuse {
            config.textured_diffuse = true;
        }

        Ok(config)
    }
}

/// Read a `RenderConfig` from JSON. Missing fields keep their defaults.
pub fn load_settings(path: &Path) -> Result<RenderConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid settings in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lumen"]);
        assert_eq!((args.width, args.height), (1440, 850));
        assert_eq!(args.format, ImageFormat::Png);
        assert_eq!(args.render_config().unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "lumen",
            "-s",
            "3",
            "--max-reflections",
            "1",
            "--seed",
            "9",
            "--textured-diffuse",
        ]);
        let config = args.render_config().unwrap();

        assert_eq!(config.samples_per_pixel, 3);
        assert_eq!(config.max_reflections, 1);
        assert_eq!(config.seed, Some(9));
        assert!(config.textured_diffuse);
    }

    #[test]
    fn test_flags_override_settings_file() {
        let path = std::env::temp_dir().join("lumen_cli_settings_test.json");
        let settings = r#"{ "samples_per_pixel": 20, "band_rows": 4, "jitter": false }"#;
        fs::write(&path, settings).unwrap();

        let args = Args::parse_from([
            "lumen",
            "--settings",
            path.to_str().unwrap(),
            "--samples",
            "2",
        ]);
        let config = args.render_config().unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.samples_per_pixel, 2);
        assert_eq!(config.band_rows, 4);
        assert!(!config.jitter);
        assert!(!config.textured_diffuse);
        assert_eq!(config.max_reflections, RenderConfig::default().max_reflections);
    }

    #[test]
    fn test_bad_settings_file() {
        let path = std::env::temp_dir().join("lumen_cli_bad_settings_test.json");
        fs::write(&path, "{ not json").unwrap();
        let result = load_settings(&path);
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
        assert!(load_settings(Path::new("missing/settings.json")).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
    }
}
