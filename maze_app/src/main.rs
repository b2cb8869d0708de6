//! Headless maze driver
//!
//! Loads the configured level, builds a number of frames and logs what a
//! rendering backend would be asked to draw.
//!
//! Usage: `maze [CONFIG.toml|CONFIG.ron] [FRAMES]`

use maze_engine::foundation::logging;
use maze_engine::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid frame count `{0}`")]
    InvalidFrameCount(String),
}

fn main() {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => MazeConfig::load_from_file(&path)?,
        None => MazeConfig::default(),
    };
    let frames: u32 = match args.next() {
        Some(arg) => arg.parse().map_err(|_| AppError::InvalidFrameCount(arg))?,
        None => 1,
    };

    logging::init_with_level(&config.log_level);
    log::info!(
        "Starting {} ({}x{})",
        config.window.title,
        config.window.width,
        config.window.height
    );

    let mut engine = Engine::new(config)?;

    for _ in 0..frames {
        engine.frame();
    }

    report(&engine);
    Ok(())
}

fn report(engine: &Engine) {
    let scene = engine.scene();
    let draw_list = engine.draw_list();

    log::info!(
        "{}x{} level, player at {:?} facing {:?}",
        scene.width(),
        scene.height(),
        scene.player.origin,
        scene.player.facing()
    );

    let mut per_model: BTreeMap<ModelId, usize> = BTreeMap::new();
    for instruction in draw_list {
        *per_model.entry(instruction.model).or_default() += 1;
    }

    for (model, instances) in &per_model {
        let vertices = scene
            .models
            .model_range(*model)
            .map_or(0, |range| range.count);
        log::info!(
            "model #{}: {} instances x {} vertices",
            model.index(),
            instances,
            vertices
        );
    }

    let draw = &engine.config().draw;
    log::info!(
        "frame {} after {:.3} s: {} draw calls ({} floor, {} wall), last frame {:.3} ms",
        engine.frame_count(),
        engine.elapsed().as_secs_f32(),
        draw_list.len(),
        draw_list.count_with_tint(draw.floor_tint),
        draw_list.count_with_tint(draw.wall_tint),
        scene.delta_time * 1000.0
    );
    log::debug!("view-projection: {:?}", engine.camera().view_projection());
}
