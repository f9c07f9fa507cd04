//! Corner rounding for convex quadrilaterals
//!
//! Builds a closed path that follows a quadrilateral's edges but replaces
//! each sharp corner with a circular arc tangent to both adjacent edges.
//! The construction is derived from the actual edge vectors at each corner
//! rather than fixed angle presets, so it holds for any convex quad, not
//! just one projection's parallelograms:
//!
//! - tangent points sit `r / tan(theta/2)` before and after the corner,
//!   where `theta` is the interior angle;
//! - the arc center sits on the inward bisector at `r / sin(theta/2)`;
//! - the sweep is `pi - theta`, oriented by the cross product of the
//!   incoming and outgoing edge directions.
//!
//! A corner degenerates to a plain line when the radius is zero or its
//! edges are (anti-)parallel.

use isobox_math::Vec2;
use crate::Path;

const DEGENERATE_EPS: f32 = 1e-6;

/// Arc replacing one corner: tangent points, circle, and sweep
struct CornerArc {
    start: Vec2,
    end: Vec2,
    center: Vec2,
    radius: f32,
    start_angle: f32,
    sweep_angle: f32,
}

/// Build the rounding arc for the corner at `corner`, or `None` when the
/// corner cannot be rounded (zero radius, coincident or collinear edges).
fn round_corner(prev: Vec2, corner: Vec2, next: Vec2, radius: f32) -> Option<CornerArc> {
    if radius <= DEGENERATE_EPS {
        return None;
    }

    let incoming = corner - prev;
    let outgoing = next - corner;
    if incoming.length_squared() <= DEGENERATE_EPS || outgoing.length_squared() <= DEGENERATE_EPS {
        return None;
    }
    let u = incoming.normalized();
    let v = outgoing.normalized();

    // Collinear or fold-back edges leave no corner to round
    let cross = u.cross(v);
    if cross.abs() <= DEGENERATE_EPS {
        return None;
    }

    // Interior angle between the two edges meeting at the corner
    let theta = (-u).dot(v).clamp(-1.0, 1.0).acos();
    let half = theta * 0.5;

    let tangent_offset = radius / half.tan();
    let start = corner - u * tangent_offset;
    let end = corner + v * tangent_offset;

    // The center sits on the inward bisector, at distance r / sin(theta/2)
    let bisector = (v - u).normalized();
    let center = corner + bisector * (radius / half.sin());

    let start_angle = (start - center).angle();
    let sweep_angle = (std::f32::consts::PI - theta) * cross.signum();

    Some(CornerArc {
        start,
        end,
        center,
        radius,
        start_angle,
        sweep_angle,
    })
}

/// Build a closed path around the quadrilateral `corners` (traversed in
/// order, then closed), rounding each corner with the given radius.
///
/// The path starts just past the first corner along the first edge, then
/// alternates straight segments with corner arcs. A well-formed convex
/// input with a radius no larger than half the shortest edge yields exactly
/// 4 arcs and 4 lines; degenerate corners fall back to plain lines. The
/// routine is total: violated preconditions produce odd geometry, never a
/// panic.
pub fn rounded_quad_path(corners: [Vec2; 4], radius: f32) -> Path {
    let rounded: [Option<CornerArc>; 4] = std::array::from_fn(|i| {
        round_corner(
            corners[(i + 3) % 4],
            corners[i],
            corners[(i + 1) % 4],
            radius,
        )
    });

    let mut path = Path::new();
    let start = match &rounded[0] {
        Some(arc) => arc.end,
        None => corners[0],
    };
    path.move_to(start);

    // Visit corners 1, 2, 3, then come back around to corner 0 so its arc
    // lands the pen exactly on the starting point before the close.
    for step in 1..=4 {
        let i = step % 4;
        match &rounded[i] {
            Some(arc) => {
                path.line_to(arc.start);
                path.arc(arc.center, arc.radius, arc.start_angle, arc.sweep_angle);
            }
            None => path.line_to(corners[i]),
        }
    }
    path.close();
    path
}
