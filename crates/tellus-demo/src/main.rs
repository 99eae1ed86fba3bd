//! Headless driver for the Tellus globe scene.
//!
//! Loads `config.ron`, applies CLI overrides, then walks the age slider and
//! prints every regenerated coastline to stdout as one JSON object per line.
//!
//! Run with `cargo run -p tellus-demo -- --ages 0 90 180 540`, or
//! `cargo run -p tellus-demo -- --sweep-step 30` to walk the whole timeline.

mod json_sink;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use tellus_config::{CliArgs, Config, default_config_dir};
use tellus_scene::GlobeScene;
use tracing::{error, info, warn};

use crate::json_sink::JsonLinesSink;

/// Ages visited when neither `--ages` nor `--sweep-step` is given.
const DEFAULT_AGES: [u32; 6] = [0, 90, 179, 180, 360, 540];

/// Frames of idle spin simulated after each age change.
const FRAMES_PER_AGE: u32 = 3;

#[derive(Parser, Debug)]
#[command(name = "tellus-demo", about = "Print coastline outlines for a range of ages")]
struct DemoArgs {
    #[command(flatten)]
    common: CliArgs,

    /// Ages to visit, in Ma.
    #[arg(long, num_args = 1..)]
    ages: Vec<u32>,

    /// Visit every age on the slider in steps of this many Ma.
    #[arg(long, conflicts_with = "ages")]
    sweep_step: Option<u32>,
}

impl DemoArgs {
    fn ages(&self, scene: &GlobeScene) -> Vec<u32> {
        if let Some(step) = self.sweep_step {
            let slider = scene.slider();
            return (slider.min()..=slider.max())
                .step_by(step.max(1) as usize)
                .collect();
        }
        if self.ages.is_empty() {
            DEFAULT_AGES.to_vec()
        } else {
            self.ages.clone()
        }
    }
}

fn main() -> ExitCode {
    let args = DemoArgs::parse();

    let config_dir = match args.common.config.clone() {
        Some(dir) => dir,
        None => match default_config_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Failed to resolve config directory: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args.common);

    let log_dir = config_dir.join("logs");
    tellus_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut scene = match GlobeScene::new(&config) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Cannot build globe scene: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Starting at {}", scene.label());

    let mut sink = JsonLinesSink::new(io::stdout().lock());
    scene.flush(&mut sink);

    // Simulate a short drag before the spin frames.
    scene.pointer_down(Vec2::ZERO);
    scene.pointer_move(Vec2::new(40.0, 20.0));
    scene.pointer_up();

    for age in args.ages(&scene) {
        if age > scene.slider().max() {
            warn!("{age} Ma is past the end of the timeline, clamping");
        }
        scene.set_age(age);
        scene.flush(&mut sink);
        for _ in 0..FRAMES_PER_AGE {
            let frame = scene.advance_frame();
            tracing::trace!(
                "frame {} yaw {:.3} outline rev {}",
                frame.frame_index,
                scene.rotation().yaw,
                frame.outline_revision
            );
        }
        info!(
            "{}: {} points, {}",
            scene.label(),
            scene.coastline().len(),
            if scene.coastline().is_closed() {
                "closed"
            } else {
                "open"
            }
        );
    }

    let written = sink.written();
    match sink.finish() {
        Ok(_) => {
            info!("Wrote {written} outlines over {} frames", scene.frame_count());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to write outlines: {e}");
            ExitCode::FAILURE
        }
    }
}
