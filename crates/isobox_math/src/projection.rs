//! Oblique projection from scene space to viewport space
//!
//! The projection is a fixed linear mapping without perspective:
//!
//! ```text
//! iso_x = (x - y) * cos(angle)
//! iso_y = (x + y) * sin(angle) - z
//! ```
//!
//! It intentionally collapses depth (y) and height (z) asymmetrically:
//! raising z only lifts the point on screen, while x and y contribute to
//! both axes. With canvas y pointing down, +x projects down-right and +y
//! down-left, giving the familiar stylized isometric look.

use serde::{Serialize, Deserialize};
use crate::{Vec2, Vec3};

/// Default projection angle in degrees
pub const DEFAULT_ANGLE_DEGREES: f32 = 30.0;

/// Oblique projection with a configurable angle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObliqueProjection {
    /// Projection angle in degrees (conventionally 30)
    angle_degrees: f32,
}

impl Default for ObliqueProjection {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE_DEGREES)
    }
}

impl ObliqueProjection {
    /// Create a projection with the given angle in degrees
    pub fn new(angle_degrees: f32) -> Self {
        Self { angle_degrees }
    }

    /// The projection angle in degrees
    #[inline]
    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    /// Project a scene-space point to viewport space
    ///
    /// Total over all finite inputs; no viewport translation or scaling is
    /// applied here.
    #[inline]
    pub fn project(&self, p: Vec3) -> Vec2 {
        let rad = self.angle_degrees.to_radians();
        Vec2::new(
            (p.x - p.y) * rad.cos(),
            (p.x + p.y) * rad.sin() - p.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec2_eq(a: Vec2, b: Vec2) {
        assert!((a.x - b.x).abs() < EPS, "x: {} != {}", a.x, b.x);
        assert!((a.y - b.y).abs() < EPS, "y: {} != {}", a.y, b.y);
    }

    #[test]
    fn test_angle_zero_degenerates_to_difference() {
        // cos(0) = 1, sin(0) = 0: iso_x = x - y, iso_y = -z
        let proj = ObliqueProjection::new(0.0);
        assert_vec2_eq(proj.project(Vec3::new(5.0, 2.0, 7.0)), Vec2::new(3.0, -7.0));
    }

    #[test]
    fn test_angle_ninety_collapses_x() {
        // cos(90) = 0, sin(90) = 1: iso_x = 0, iso_y = x + y - z
        let proj = ObliqueProjection::new(90.0);
        assert_vec2_eq(proj.project(Vec3::new(5.0, 2.0, 3.0)), Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_thirty_degrees_known_values() {
        let proj = ObliqueProjection::default();
        assert_eq!(proj.angle_degrees(), 30.0);

        // (0, 0, 2) -> iso_x = 0, iso_y = -2
        assert_vec2_eq(proj.project(Vec3::new(0.0, 0.0, 2.0)), Vec2::new(0.0, -2.0));

        // (1, 0, 0) -> (cos30, sin30)
        assert_vec2_eq(
            proj.project(Vec3::X),
            Vec2::new(3.0f32.sqrt() / 2.0, 0.5),
        );

        // (0, 1, 0) -> (-cos30, sin30)
        assert_vec2_eq(
            proj.project(Vec3::Y),
            Vec2::new(-(3.0f32.sqrt()) / 2.0, 0.5),
        );
    }

    #[test]
    fn test_height_only_lifts() {
        // Raising z must leave iso_x untouched and decrease iso_y by the
        // same amount, for any angle.
        for angle in [0.0, 17.5, 30.0, 45.0, 90.0] {
            let proj = ObliqueProjection::new(angle);
            let base = proj.project(Vec3::new(2.0, 3.0, 0.0));
            let lifted = proj.project(Vec3::new(2.0, 3.0, 1.5));
            assert!((lifted.x - base.x).abs() < EPS);
            assert!((lifted.y - (base.y - 1.5)).abs() < EPS);
        }
    }

    #[test]
    fn test_projection_is_linear() {
        let proj = ObliqueProjection::new(30.0);
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let sum = proj.project(a + b);
        let parts = proj.project(a) + proj.project(b);
        assert_vec2_eq(sum, parts);
    }
}
