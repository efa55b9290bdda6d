//! Lumen command line renderer.
//!
//! Renders the demo scene to a timestamped image. Ctrl-C stops the render
//! between rows and the partial frame is still written.

mod cli;
mod logger;
mod output;
mod scene;

use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use lumen_renderer::{render, render_parallel, Skybox};

use cli::Args;
use logger::init_logger;
use output::{output_path, ProgressSink};
use scene::{demo_camera, demo_scene};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    info!("Lumen v{}", env!("CARGO_PKG_VERSION"));

    let config = args.render_config()?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let skybox = match &args.skybox {
        Some(path) => {
            info!("Loading skybox: {}", path.display());
            let skybox = Skybox::load(path)
                .with_context(|| format!("Failed to load skybox {}", path.display()))?;
            Some(skybox)
        }
        None => None,
    };

    let scene = demo_scene(skybox);
    let camera = demo_camera(&args);
    info!(
        "Scene: {} objects, camera at {:?}, fov {}°, focus {}, aperture {}",
        scene.len(),
        camera.position,
        camera.fov,
        camera.focus_distance,
        camera.aperture
    );

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.store(true, Ordering::Relaxed))
            .context("Failed to install the Ctrl-C handler")?;
    }

    let mut sink = ProgressSink::new(camera.image_height(), cancel);
    let outcome = if args.threads == Some(1) {
        render(&camera, &scene, &config, &mut sink)
    } else {
        render_parallel(&camera, &scene, &config, &mut sink)
    };

    if outcome.cancelled {
        sink.finish("cancelled");
        warn!(
            "Writing partial frame: {} of {} rows rendered",
            outcome.rows_done,
            camera.image_height()
        );
    } else {
        sink.finish("done");
    }

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;
    let path = output_path(&args.output_dir, args.format);
    outcome.frame.save(&path)?;

    println!("{}", path.display());
    Ok(())
}
