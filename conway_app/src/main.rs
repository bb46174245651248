// main.rs - Conway's Game of Life in an egui window

use eframe::egui;

mod config;
mod render;
mod ui;
mod world;

use config::{AppConfig, ConfigError};
use ui::GameOfLife;
use world::World;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("window failed: {0}")]
    Window(#[from] eframe::Error),
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!(
        "{}x{} grid, {}px cells, {}ms interval",
        config.width,
        config.height,
        config.cell_size,
        config.interval_ms
    );

    // Room for the control rows above the canvas
    let canvas = render::canvas_size(config.width, config.height, config.cell_size);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas.x.max(760.0) + 40.0, canvas.y + 220.0]),
        ..Default::default()
    };

    let app = GameOfLife::new(World::from_config(&config), &config);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}
