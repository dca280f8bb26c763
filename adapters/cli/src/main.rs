#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Snake experience.

use anyhow::{Context, Result};
use env_logger::Env;
use snake_cli::{Simulation, SimulationConfig, TICK_INTERVAL};
use snake_core::Board;
use snake_rendering::RenderingBackend;
use snake_rendering_macroquad::MacroquadBackend;

/// Entry point for the Snake executable.
fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let board = Board::from_pixels(
        Board::REFERENCE_WIDTH,
        Board::REFERENCE_HEIGHT,
        Board::REFERENCE_CELL_LENGTH,
    )
    .context("window does not divide into whole cells")?;
    let config = SimulationConfig::new(board, TICK_INTERVAL, rand::random(), rand::random());
    log::info!(
        "starting on a {}x{} board ({}x{} cells of {}px), one tick every {}ms",
        config.board().pixel_width(),
        config.board().pixel_height(),
        config.board().columns(),
        config.board().rows(),
        config.board().cell_length(),
        config.tick_interval().as_millis()
    );

    let mut simulation = Simulation::new(config);

    let presentation = simulation.presentation();
    MacroquadBackend::new()
        .with_vsync(true)
        .run(presentation, move |dt, input, scene| {
            let _ = simulation.advance(dt, &input);
            simulation.populate_scene(scene);
        })?;

    log::info!("shutting down");
    Ok(())
}
