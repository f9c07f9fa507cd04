//! Closed 2D paths built from lines and circular arcs
//!
//! [`Path`] is a plain element list; it carries no paint state. Backends
//! decide how to realize arcs (the raster backend flattens them to cubic
//! Bezier segments).

use isobox_math::Vec2;

/// One element of a path
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathElement {
    /// Start a new subpath at the given point
    MoveTo(Vec2),
    /// Straight segment from the current point
    LineTo(Vec2),
    /// Circular arc around `center`
    ///
    /// The arc starts at angle `start_angle` (radians, from the positive x
    /// axis) and sweeps `sweep_angle` radians; positive sweeps turn toward
    /// positive y. The current point is expected to already sit at the
    /// arc's start point.
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
    },
    /// Close the current subpath back to its starting point
    Close,
}

/// An ordered sequence of path elements
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// A closed straight-edged quadrilateral through the four points in order
    pub fn quad(points: [Vec2; 4]) -> Self {
        let mut path = Self::new();
        path.move_to(points[0]);
        path.line_to(points[1]);
        path.line_to(points[2]);
        path.line_to(points[3]);
        path.close();
        path
    }

    /// Start a new subpath
    pub fn move_to(&mut self, p: Vec2) {
        self.elements.push(PathElement::MoveTo(p));
    }

    /// Straight segment to `p`
    pub fn line_to(&mut self, p: Vec2) {
        self.elements.push(PathElement::LineTo(p));
    }

    /// Circular arc around `center` from `start_angle` sweeping `sweep_angle`
    pub fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, sweep_angle: f32) {
        self.elements.push(PathElement::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        });
    }

    /// Close the current subpath
    pub fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }

    /// The elements in order
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// True when the path has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The first `MoveTo` point, if any
    pub fn start_point(&self) -> Option<Vec2> {
        self.elements.iter().find_map(|e| match e {
            PathElement::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// The point the pen rests on after the last element
    ///
    /// `Close` returns the pen to the subpath start; an arc ends at
    /// `center + radius * (cos, sin)(start_angle + sweep_angle)`.
    pub fn end_point(&self) -> Option<Vec2> {
        let mut start = None;
        let mut current = None;
        for element in &self.elements {
            match *element {
                PathElement::MoveTo(p) => {
                    start = Some(p);
                    current = Some(p);
                }
                PathElement::LineTo(p) => current = Some(p),
                PathElement::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    let end = center + Vec2::from_angle(start_angle + sweep_angle) * radius;
                    current = Some(end);
                }
                PathElement::Close => current = start,
            }
        }
        current
    }

    /// Number of arc elements
    pub fn arc_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, PathElement::Arc { .. }))
            .count()
    }

    /// Number of straight-line elements
    pub fn line_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, PathElement::LineTo(_)))
            .count()
    }

    /// True when the path ends where it started
    pub fn is_closed(&self) -> bool {
        matches!(self.elements.last(), Some(PathElement::Close))
    }
}
