//! Box drawing parameters and entry-contract validation
//!
//! All validation happens here, before anything reaches the compositor.
//! The projector and path builder stay total; callers get a [`SpecError`]
//! instead of silently corrupted geometry.

use std::fmt;
use serde::{Serialize, Deserialize};
use isobox_math::Vec3;
use crate::Color;

/// Default box extents: width, depth, height
pub const DEFAULT_EXTENTS: Vec3 = Vec3 { x: 3.0, y: 3.0, z: 2.0 };

/// Default scene-unit to pixel scale
pub const DEFAULT_SCALE: f32 = 40.0;

/// Default top-face corner radius in pixels
pub const DEFAULT_TOP_CORNER_RADIUS: f32 = 6.0;

/// Visual style of a rendered box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill for the rounded top face
    pub top_color: Color,
    /// Fill for the five flat faces
    pub side_color: Color,
    /// Stroke color, used only when `outline_width > 0`
    pub outline_color: Color,
    /// Stroke width in pixels; zero or negative disables stroking
    pub outline_width: f32,
    /// Top-face corner radius in pixels
    ///
    /// Clamped by the compositor to half the shortest projected top edge.
    pub top_corner_radius: f32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            top_color: Color::GRAY,
            side_color: Color::BLACK,
            outline_color: Color::BLACK,
            outline_width: 0.0,
            top_corner_radius: DEFAULT_TOP_CORNER_RADIUS,
        }
    }
}

/// Everything needed to draw one box
///
/// Defaults match the conventional preview: a 3x3x2 box at the origin,
/// 30 degree projection, 40 px per scene unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Box origin (minimum corner) in scene units
    pub origin: Vec3,
    /// Box extents: width (x), depth (y), height (z)
    pub extents: Vec3,
    /// Projection angle in degrees
    pub angle_degrees: f32,
    /// Scene-unit to pixel scale
    pub scale: f32,
    /// Fill and stroke style
    pub style: BoxStyle,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            extents: DEFAULT_EXTENTS,
            angle_degrees: isobox_math::projection::DEFAULT_ANGLE_DEGREES,
            scale: DEFAULT_SCALE,
            style: BoxStyle::default(),
        }
    }
}

impl BoxSpec {
    /// Create a spec with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the box origin
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set the box extents
    pub fn with_extents(mut self, extents: Vec3) -> Self {
        self.extents = extents;
        self
    }

    /// Set the projection angle in degrees
    pub fn with_angle_degrees(mut self, angle_degrees: f32) -> Self {
        self.angle_degrees = angle_degrees;
        self
    }

    /// Set the scene-unit to pixel scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the visual style
    pub fn with_style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Validate the spec at the drawing entry point
    ///
    /// Rejects negative extents (they flip face windings), non-finite
    /// numeric fields, and non-positive scale. Zero extents pass: the
    /// corners coincide, which renders as a degenerate but well-defined
    /// silhouette.
    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.origin.is_finite() {
            return Err(SpecError::NonFinite("origin"));
        }
        if !self.extents.is_finite() {
            return Err(SpecError::NonFinite("extents"));
        }
        if !self.angle_degrees.is_finite() {
            return Err(SpecError::NonFinite("angle_degrees"));
        }
        if !self.scale.is_finite() {
            return Err(SpecError::NonFinite("scale"));
        }
        if !self.style.outline_width.is_finite() {
            return Err(SpecError::NonFinite("outline_width"));
        }
        if !self.style.top_corner_radius.is_finite() {
            return Err(SpecError::NonFinite("top_corner_radius"));
        }
        if self.extents.min_component() < 0.0 {
            return Err(SpecError::NegativeExtent(self.extents));
        }
        if self.scale <= 0.0 {
            return Err(SpecError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Error type for spec validation
#[derive(Debug)]
pub enum SpecError {
    /// One of the extents is negative
    NegativeExtent(Vec3),
    /// A numeric field is NaN or infinite
    NonFinite(&'static str),
    /// The pixel scale is zero or negative
    InvalidScale(f32),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::NegativeExtent(e) => {
                write!(f, "Negative box extent: ({}, {}, {})", e.x, e.y, e.z)
            }
            SpecError::NonFinite(field) => write!(f, "Non-finite value in field: {}", field),
            SpecError::InvalidScale(s) => write!(f, "Invalid pixel scale: {}", s),
        }
    }
}

impl std::error::Error for SpecError {}
