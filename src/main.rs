//! Isobox - render a configured box to a PNG file

use std::error::Error;

use isobox::config::AppConfig;
use isobox::{render_box, Color, PixmapCanvas};

fn main() {
    env_logger::init();
    log::info!("Starting isobox");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let spec = config.to_box_spec();
    let mut canvas = PixmapCanvas::new(config.viewport.width, config.viewport.height)?;
    canvas.clear(Color::from(config.viewport.background_color));

    render_box(&spec, &mut canvas)?;
    canvas.save_png(&config.viewport.output)?;

    log::info!(
        "Rendered {}x{} box to {}",
        config.viewport.width,
        config.viewport.height,
        config.viewport.output
    );
    Ok(())
}
