//! 01 - Rounded Box
//!
//! The simplest isobox demo: render a single rounded-top box with an
//! outline and save it as a PNG.
//!
//! This demo demonstrates:
//! - Building a BoxSpec with the builder methods
//! - Styling the top, sides, and outline
//! - Rendering onto the tiny-skia raster canvas
//!
//! Run with: `cargo run --example 01_rounded_box`

use isobox::{render_box, BoxSpec, BoxStyle, Color, PixmapCanvas};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let spec = BoxSpec::new().with_style(BoxStyle {
        top_color: Color::from_rgb(0.85, 0.75, 0.45),
        side_color: Color::from_rgb(0.45, 0.35, 0.2),
        outline_color: Color::BLACK,
        outline_width: 1.5,
        top_corner_radius: 6.0,
    });

    let mut canvas = PixmapCanvas::new(200, 200)?;
    canvas.clear(Color::WHITE);
    render_box(&spec, &mut canvas)?;
    canvas.save_png("demo_rounded_box.png")?;

    println!("Wrote demo_rounded_box.png");
    Ok(())
}
