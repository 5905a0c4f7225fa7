use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use spheretracer::camera::Camera;
use spheretracer::output::save_image;
use spheretracer::scene::{RenderConfig, SceneFile};

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("spheretracer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve settings, render, and write the image.
fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = RenderConfig::default();
    if let Some(path) = &args.config {
        let file = SceneFile::load(path)?;
        config.apply_file(file);
        info!("Loaded scene from {}", path.display());
    }
    args.apply_overrides(&mut config);
    config.validate().context("invalid render settings")?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(usize::from(threads))
            .build_global()
            .context("failed to configure render threads")?;
    }

    let scene = &config.scene;
    info!("Image resolution: {}x{}", config.width, config.height);
    info!(
        "Sphere at {} radius {} color {:?}, light at {}",
        scene.sphere.center, scene.sphere.radius, scene.sphere.color.0, scene.light.position
    );

    let camera = Camera::new(config.width, config.height).with_progress(!args.no_progress);
    let image = camera.render(scene);

    save_image(&image, &config.output)?;
    Ok(())
}
