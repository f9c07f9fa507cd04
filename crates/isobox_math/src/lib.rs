//! 2D/3D Mathematics Library
//!
//! This crate provides the vector and projection types for the isobox renderer.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in viewport space
//! - [`Vec3`] - 3D vector in scene space
//! - [`ObliqueProjection`] - Fixed oblique projection from scene to viewport space

mod vec2;
mod vec3;
pub mod projection;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use projection::ObliqueProjection;
