//! Drawing-surface boundary
//!
//! The compositor only ever talks to a [`Canvas`]: an opaque sink that
//! accepts filled and stroked paths and reports its own size. The raster
//! backend implements it with tiny-skia; [`RecordingCanvas`] implements it
//! by keeping the paint calls around for inspection.

use isobox_core::Color;
use crate::Path;

/// A drawing surface accepting fill and stroke commands
pub trait Canvas {
    /// Surface width in pixels
    fn width(&self) -> f32;

    /// Surface height in pixels
    fn height(&self) -> f32;

    /// Fill a closed path with a solid color
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke a path's outline
    fn stroke_path(&mut self, path: &Path, color: Color, width: f32);
}

/// One recorded paint command
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    Fill { path: Path, color: Color },
    Stroke { path: Path, color: Color, width: f32 },
}

impl PaintOp {
    /// The path of this command
    pub fn path(&self) -> &Path {
        match self {
            PaintOp::Fill { path, .. } => path,
            PaintOp::Stroke { path, .. } => path,
        }
    }

    /// True for a fill command
    pub fn is_fill(&self) -> bool {
        matches!(self, PaintOp::Fill { .. })
    }
}

/// A canvas that records every paint call instead of rasterizing
///
/// Used by tests to assert on draw order and stroke gating.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    ops: Vec<PaintOp>,
}

impl RecordingCanvas {
    /// Create a recording canvas with the given surface size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// The recorded commands in paint order
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.ops.push(PaintOp::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        self.ops.push(PaintOp::Stroke {
            path: path.clone(),
            color,
            width,
        });
    }
}
