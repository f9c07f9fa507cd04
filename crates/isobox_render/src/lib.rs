//! Isometric box rendering
//!
//! This crate turns an [`isobox_core::BoxSpec`] into paint commands on a
//! [`Canvas`]:
//!
//! - [`Path`] / [`PathElement`] - closed paths built from lines and arcs
//! - [`rounded_quad_path`] - corner rounding for convex quadrilaterals
//! - [`render_box`] - face compositor with the fixed painter's draw order
//! - [`RecordingCanvas`] - canvas that records paint calls for inspection
//! - [`PixmapCanvas`] - tiny-skia raster backend with PNG output
//!
//! Geometry types live in `isobox_core`; this crate re-exports the common
//! ones for convenience.

mod canvas;
mod compositor;
mod path;
mod raster;
mod rounded;

pub use canvas::{Canvas, PaintOp, RecordingCanvas};
pub use compositor::render_box;
pub use path::{Path, PathElement};
pub use raster::{PixmapCanvas, RasterError};
pub use rounded::rounded_quad_path;

// Re-export core types for convenience
pub use isobox_core::{BoxSpec, BoxStyle, Color, Cuboid, Face, SpecError};
pub use isobox_math::{ObliqueProjection, Vec2, Vec3};
