//! Core types for the isobox renderer
//!
//! This crate provides the foundational types for describing a box to draw:
//!
//! - [`Color`] - RGBA color value
//! - [`Cuboid`] - Axis-aligned box deriving its 8 corners
//! - [`Face`] - One side of the box with its fixed corner indices and draw order
//! - [`BoxSpec`] / [`BoxStyle`] - Caller-supplied drawing parameters with defaults
//! - [`SpecError`] - Entry-contract validation failures

mod color;
mod cuboid;
mod spec;

pub use color::Color;
pub use cuboid::{Cuboid, Face};
pub use spec::{BoxSpec, BoxStyle, SpecError};

// Re-export commonly used types from isobox_math for convenience
pub use isobox_math::{ObliqueProjection, Vec2, Vec3};
