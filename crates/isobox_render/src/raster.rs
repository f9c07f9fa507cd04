//! Raster canvas backed by tiny-skia
//!
//! Realizes the [`Canvas`] commands on a CPU pixmap. Circular arcs are
//! flattened to cubic Bezier segments of at most a quarter turn each,
//! using the standard `k = 4/3 * tan(delta/4)` control-point offset.

use std::fmt;
use std::path::Path as FilePath;

use tiny_skia::{FillRule, Paint, Pixmap, PathBuilder, Stroke, Transform};

use isobox_core::Color;
use isobox_math::Vec2;
use crate::{Canvas, Path, PathElement};

/// Error type for raster-canvas operations
#[derive(Debug)]
pub enum RasterError {
    /// Width or height was zero or too large for a pixmap
    InvalidSize { width: u32, height: u32 },
    /// PNG encoding or IO failure while saving
    Png(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidSize { width, height } => {
                write!(f, "Invalid pixmap size: {}x{}", width, height)
            }
            RasterError::Png(msg) => write!(f, "PNG write failed: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}

/// A CPU raster surface implementing [`Canvas`]
pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    /// Create a canvas of the given pixel size, cleared to transparent
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    /// Fill the whole surface with a background color
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    /// The underlying pixmap
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Encode the surface as a PNG file
    pub fn save_png<P: AsRef<FilePath>>(&self, path: P) -> Result<(), RasterError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| RasterError::Png(e.to_string()))
    }
}

impl Canvas for PixmapCanvas {
    fn width(&self) -> f32 {
        self.pixmap.width() as f32
    }

    fn height(&self) -> f32 {
        self.pixmap.height() as f32
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let Some(skia_path) = to_skia_path(path) else {
            return;
        };
        let paint = solid_paint(color);
        self.pixmap.fill_path(
            &skia_path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        let Some(skia_path) = to_skia_path(path) else {
            return;
        };
        let paint = solid_paint(color);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &skia_path,
            &paint,
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia_color(color));
    paint.anti_alias = true;
    paint
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let c = color.clamped();
    tiny_skia::Color::from_rgba(c.r, c.g, c.b, c.a).unwrap_or(tiny_skia::Color::BLACK)
}

/// Convert an element list to a tiny-skia path, flattening arcs
///
/// Returns `None` for paths tiny-skia rejects (empty or degenerate).
fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathElement::MoveTo(p) => builder.move_to(p.x, p.y),
            PathElement::LineTo(p) => builder.line_to(p.x, p.y),
            PathElement::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => arc_to_cubics(&mut builder, center, radius, start_angle, sweep_angle),
            PathElement::Close => builder.close(),
        }
    }
    builder.finish()
}

/// Append cubic Bezier segments approximating a circular arc
///
/// The builder's current point must sit on the arc's start point. Sweeps
/// longer than a quarter turn are split so the control-point formula stays
/// accurate.
fn arc_to_cubics(
    builder: &mut PathBuilder,
    center: Vec2,
    radius: f32,
    start_angle: f32,
    sweep_angle: f32,
) {
    use std::f32::consts::FRAC_PI_2;

    let segments = (sweep_angle.abs() / FRAC_PI_2).ceil().max(1.0) as u32;
    let delta = sweep_angle / segments as f32;
    let k = 4.0 / 3.0 * (delta / 4.0).tan();

    let mut angle = start_angle;
    for _ in 0..segments {
        let next = angle + delta;
        let from = center + Vec2::from_angle(angle) * radius;
        let to = center + Vec2::from_angle(next) * radius;
        // Tangent directions at the endpoints
        let c1 = from + Vec2::new(-angle.sin(), angle.cos()) * (k * radius);
        let c2 = to - Vec2::new(-next.sin(), next.cos()) * (k * radius);
        builder.cubic_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
        angle = next;
    }
}
