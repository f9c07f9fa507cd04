//! Isobox - stylized isometric box rendering
//!
//! Renders a single rounded-top isometric cuboid onto a 2D drawing surface.
//! The heavy lifting lives in the workspace crates; this crate adds the
//! layered configuration and re-exports the public surface.

pub mod config;

pub use isobox_core::{BoxSpec, BoxStyle, Color, Cuboid, Face, SpecError};
pub use isobox_math::{ObliqueProjection, Vec2, Vec3};
pub use isobox_render::{
    render_box, rounded_quad_path, Canvas, PaintOp, Path, PathElement, PixmapCanvas, RasterError,
    RecordingCanvas,
};
