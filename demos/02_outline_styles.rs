//! 02 - Outline Styles
//!
//! Renders three boxes on one surface with different origins, corner radii,
//! and outline settings. Shifting a box's origin moves it across the
//! viewport because the projection is applied before the viewport
//! translation.
//!
//! Run with: `cargo run --example 02_outline_styles`

use isobox::{render_box, BoxSpec, BoxStyle, Color, PixmapCanvas, Vec3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut canvas = PixmapCanvas::new(480, 320)?;
    canvas.clear(Color::from_rgb(0.96, 0.96, 0.94));

    // Back row first so the front box overlaps it naturally
    let specs = [
        BoxSpec::new()
            .with_origin(Vec3::new(-2.0, 2.0, 0.0))
            .with_extents(Vec3::new(2.0, 2.0, 3.0))
            .with_scale(30.0)
            .with_style(BoxStyle {
                top_color: Color::from_rgb(0.55, 0.7, 0.55),
                side_color: Color::from_rgb(0.25, 0.4, 0.25),
                outline_width: 0.0,
                top_corner_radius: 10.0,
                ..BoxStyle::default()
            }),
        BoxSpec::new()
            .with_origin(Vec3::new(1.5, -2.5, 0.0))
            .with_extents(Vec3::new(2.5, 2.5, 1.0))
            .with_scale(30.0)
            .with_style(BoxStyle {
                top_color: Color::from_rgb(0.6, 0.6, 0.8),
                side_color: Color::from_rgb(0.3, 0.3, 0.5),
                outline_color: Color::BLACK,
                outline_width: 1.0,
                top_corner_radius: 0.0,
            }),
        BoxSpec::new()
            .with_extents(Vec3::new(3.0, 3.0, 2.0))
            .with_scale(30.0)
            .with_style(BoxStyle {
                top_color: Color::from_rgb(0.85, 0.75, 0.45),
                side_color: Color::from_rgb(0.45, 0.35, 0.2),
                outline_color: Color::from_rgb(0.15, 0.1, 0.05),
                outline_width: 2.0,
                top_corner_radius: 8.0,
            }),
    ];

    for spec in &specs {
        render_box(spec, &mut canvas)?;
    }

    canvas.save_png("demo_outline_styles.png")?;
    println!("Wrote demo_outline_styles.png");
    Ok(())
}
