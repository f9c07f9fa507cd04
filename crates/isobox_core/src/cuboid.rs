//! Axis-aligned cuboid geometry
//!
//! A cuboid has 8 corners (all combinations of origin plus extents on each
//! axis) and 6 quadrilateral faces. Corners use binary indexing: bit 0 adds
//! the width (x), bit 1 the depth (y), bit 2 the height (z).
//!
//! Faces are drawn in a fixed back-to-front order with the top strictly
//! last, so the rounded top visually wins overlaps along shared edges.

use serde::{Serialize, Deserialize};
use isobox_math::Vec3;

/// An axis-aligned box in scene space, defined by its minimum corner and extents
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    /// Minimum corner (x, y, z)
    pub origin: Vec3,
    /// Extents along each axis: width (x), depth (y), height (z)
    pub extents: Vec3,
}

impl Cuboid {
    /// Create a cuboid from its minimum corner and extents
    pub fn new(origin: Vec3, extents: Vec3) -> Self {
        Self { origin, extents }
    }

    /// The 8 corners in binary index order
    ///
    /// Corner `i` adds `extents.x` when bit 0 of `i` is set, `extents.y`
    /// for bit 1, and `extents.z` for bit 2. With zero extents all corners
    /// coincide; that degenerate case is accepted.
    pub fn corners(&self) -> [Vec3; 8] {
        let o = self.origin;
        let e = self.extents;
        [
            Vec3::new(o.x,       o.y,       o.z),       // 0 = 0b000
            Vec3::new(o.x + e.x, o.y,       o.z),       // 1 = 0b001
            Vec3::new(o.x,       o.y + e.y, o.z),       // 2 = 0b010
            Vec3::new(o.x + e.x, o.y + e.y, o.z),       // 3 = 0b011
            Vec3::new(o.x,       o.y,       o.z + e.z), // 4 = 0b100
            Vec3::new(o.x + e.x, o.y,       o.z + e.z), // 5 = 0b101
            Vec3::new(o.x,       o.y + e.y, o.z + e.z), // 6 = 0b110
            Vec3::new(o.x + e.x, o.y + e.y, o.z + e.z), // 7 = 0b111
        ]
    }
}

/// One face of a cuboid
///
/// The variant names follow the projected screen layout: with +x projecting
/// down-right and +y down-left, `Right` is the x-max plane, `Front` the
/// y-max plane, and `Back`/`Left` their hidden opposites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// z-min plane
    Bottom,
    /// x-min plane
    Left,
    /// x-max plane
    Right,
    /// y-max plane
    Front,
    /// y-min plane
    Back,
    /// z-max plane, rendered with rounded corners
    Top,
}

impl Face {
    /// Fixed painter's draw order: the five flat faces, then the top
    ///
    /// The position of `Top` at the end is load-bearing; everything else
    /// about depth is resolved by this order rather than sorting.
    pub const DRAW_ORDER: [Face; 6] = [
        Face::Bottom,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
        Face::Top,
    ];

    /// Corner indices of this face, in winding order
    ///
    /// Consecutive entries (wrapping) always share exactly one cuboid edge.
    pub fn corner_indices(self) -> [usize; 4] {
        match self {
            Face::Bottom => [0, 1, 3, 2],
            Face::Left => [0, 2, 6, 4],
            Face::Right => [1, 3, 7, 5],
            Face::Front => [2, 3, 7, 6],
            Face::Back => [0, 1, 5, 4],
            Face::Top => [4, 5, 7, 6],
        }
    }
}
