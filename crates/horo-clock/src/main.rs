mod app;
mod config;

use anyhow::{Context, Result};

use horo_engine::logging::{LoggingConfig, init_logging};
use horo_engine::time::SystemTimeSource;
use horo_engine::window::Runtime;

use crate::app::ClockApp;
use crate::config::ClockConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ClockConfig::default()
        .apply_env()
        .context("invalid clock configuration")?;
    log::info!(
        "{}: {}x{} canvas at {}x, {} numerals, toggle with {}",
        config.title,
        config.canvas_width,
        config.canvas_height,
        config.pixel_scale,
        config.mode,
        config.toggle_key,
    );

    let app = ClockApp::new(&config, SystemTimeSource::new())?;
    Runtime::run(config.runtime_config(), config.gpu_init(), app)
}
