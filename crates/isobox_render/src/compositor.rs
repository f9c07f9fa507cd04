//! Face compositing
//!
//! Projects a box's corners into viewport space and issues the paint calls
//! in the fixed painter's order: five flat faces, then the rounded top.
//! Everything is recomputed per call; no state survives a draw.

use isobox_core::{BoxSpec, Cuboid, Face, SpecError};
use isobox_math::{ObliqueProjection, Vec2};
use crate::{rounded_quad_path, Canvas, Path};

/// Render one box onto the canvas
///
/// Validates the spec at entry, projects the 8 corners to viewport space as
/// `center + projected * scale`, then draws each face of
/// [`Face::DRAW_ORDER`] with the spec's side color, finishing with the
/// rounded top face in the top color. Each face is stroked with the outline
/// color only when `outline_width > 0`.
pub fn render_box(spec: &BoxSpec, canvas: &mut dyn Canvas) -> Result<(), SpecError> {
    spec.validate()?;

    let center = Vec2::new(canvas.width() * 0.5, canvas.height() * 0.5);
    let projection = ObliqueProjection::new(spec.angle_degrees);
    let cuboid = Cuboid::new(spec.origin, spec.extents);

    let mut projected = [Vec2::ZERO; 8];
    for (i, corner) in cuboid.corners().iter().enumerate() {
        projected[i] = center + projection.project(*corner) * spec.scale;
    }
    log::trace!(
        "rendering box at {:?} ({}x{} canvas, scale {})",
        spec.origin,
        canvas.width(),
        canvas.height(),
        spec.scale
    );

    let stroke = spec.style.outline_width > 0.0;
    for face in Face::DRAW_ORDER {
        let quad = face.corner_indices().map(|i| projected[i]);
        let (path, fill) = if face == Face::Top {
            let radius = clamp_radius(spec.style.top_corner_radius, &quad);
            (rounded_quad_path(quad, radius), spec.style.top_color)
        } else {
            (Path::quad(quad), spec.style.side_color)
        };
        canvas.fill_path(&path, fill);
        if stroke {
            canvas.stroke_path(&path, spec.style.outline_color, spec.style.outline_width);
        }
    }
    Ok(())
}

/// Clamp the corner radius to half the shortest edge of the projected quad
///
/// Keeps adjacent arcs from overlapping or inverting on small faces. A
/// degenerate quad (coincident corners) clamps the radius to zero.
fn clamp_radius(radius: f32, quad: &[Vec2; 4]) -> f32 {
    let mut shortest = f32::MAX;
    for i in 0..4 {
        shortest = shortest.min(quad[i].distance(quad[(i + 1) % 4]));
    }
    radius.clamp(0.0, shortest * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isobox_core::{BoxStyle, Color};
    use isobox_math::Vec3;
    use crate::{PaintOp, PathElement, RecordingCanvas};

    fn outlined_spec() -> BoxSpec {
        BoxSpec::new().with_style(BoxStyle {
            outline_width: 2.0,
            ..BoxStyle::default()
        })
    }

    #[test]
    fn test_draw_order_six_fills_top_last() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        render_box(&BoxSpec::default(), &mut canvas).unwrap();

        // Outline disabled by default: exactly the six face fills
        assert_eq!(canvas.ops().len(), 6);
        for (i, op) in canvas.ops().iter().enumerate() {
            assert!(op.is_fill(), "op {} is not a fill", i);
        }

        // The first five are plain quads with 4 distinct vertices
        for op in &canvas.ops()[..5] {
            let path = op.path();
            assert_eq!(path.line_count(), 3);
            assert_eq!(path.arc_count(), 0);
            let mut vertices: Vec<Vec2> = path
                .elements()
                .iter()
                .filter_map(|e| match e {
                    PathElement::MoveTo(p) | PathElement::LineTo(p) => Some(*p),
                    _ => None,
                })
                .collect();
            assert_eq!(vertices.len(), 4);
            vertices.dedup();
            assert_eq!(vertices.len(), 4, "face vertices are not distinct");
        }

        // The last is the rounded top
        let top = canvas.ops()[5].path();
        assert_eq!(top.arc_count(), 4);
        assert_eq!(top.line_count(), 4);
    }

    #[test]
    fn test_fill_colors_per_face() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        let spec = BoxSpec::new().with_style(BoxStyle {
            top_color: Color::from_rgb(0.8, 0.2, 0.2),
            side_color: Color::from_rgb(0.1, 0.1, 0.3),
            ..BoxStyle::default()
        });
        render_box(&spec, &mut canvas).unwrap();

        for op in &canvas.ops()[..5] {
            match op {
                PaintOp::Fill { color, .. } => assert_eq!(*color, spec.style.side_color),
                other => panic!("Expected fill, got {:?}", other),
            }
        }
        match &canvas.ops()[5] {
            PaintOp::Fill { color, .. } => assert_eq!(*color, spec.style.top_color),
            other => panic!("Expected fill, got {:?}", other),
        }
    }

    #[test]
    fn test_outline_gating_disabled() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        let mut spec = BoxSpec::default();
        spec.style.outline_width = 0.0;
        render_box(&spec, &mut canvas).unwrap();
        assert!(canvas.ops().iter().all(PaintOp::is_fill));

        canvas.clear();
        spec.style.outline_width = -3.0;
        render_box(&spec, &mut canvas).unwrap();
        assert!(canvas.ops().iter().all(PaintOp::is_fill));
    }

    #[test]
    fn test_outline_gating_enabled() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        render_box(&outlined_spec(), &mut canvas).unwrap();

        // fill/stroke interleaved per face: 12 ops, strokes in odd slots
        assert_eq!(canvas.ops().len(), 12);
        let strokes: Vec<&PaintOp> = canvas.ops().iter().filter(|op| !op.is_fill()).collect();
        assert_eq!(strokes.len(), 6);
        for op in strokes {
            match op {
                PaintOp::Stroke { color, width, .. } => {
                    assert_eq!(*color, Color::BLACK);
                    assert_eq!(*width, 2.0);
                }
                _ => unreachable!(),
            }
        }

        // Top fill and stroke are the last two calls
        assert!(canvas.ops()[10].is_fill());
        assert_eq!(canvas.ops()[10].path().arc_count(), 4);
        assert!(!canvas.ops()[11].is_fill());
        assert_eq!(canvas.ops()[11].path().arc_count(), 4);
    }

    #[test]
    fn test_viewport_transform_example() {
        // 200x200 viewport, default box: the top corner (0,0,2) projects
        // to (0,-2) and lands at (100, 20).
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        render_box(&BoxSpec::default(), &mut canvas).unwrap();

        let expected = Vec2::new(100.0, 20.0);
        let found = canvas.ops().iter().any(|op| {
            op.path().elements().iter().any(|e| match e {
                PathElement::MoveTo(p) | PathElement::LineTo(p) => p.distance(expected) < 1e-3,
                _ => false,
            })
        });
        assert!(found, "no face vertex at {:?}", expected);
    }

    #[test]
    fn test_oversized_radius_is_clamped() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        let mut spec = BoxSpec::default();
        spec.style.top_corner_radius = 10_000.0;
        render_box(&spec, &mut canvas).unwrap();

        let top = canvas.ops()[5].path();
        assert_eq!(top.arc_count(), 4);
        // Still closed after clamping
        let start = top.start_point().unwrap();
        let end = top.end_point().unwrap();
        assert!(start.distance(end) < 1e-3);
    }

    #[test]
    fn test_zero_radius_top_is_plain_quad() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        let mut spec = BoxSpec::default();
        spec.style.top_corner_radius = 0.0;
        render_box(&spec, &mut canvas).unwrap();

        let top = canvas.ops()[5].path();
        assert_eq!(top.arc_count(), 0);
        assert_eq!(top.line_count(), 4);
        assert!(top.is_closed());
    }

    #[test]
    fn test_zero_extent_box_renders_without_arcs() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        let spec = BoxSpec::new().with_extents(Vec3::ZERO);
        render_box(&spec, &mut canvas).unwrap();

        // All faces collapse to a point; the radius clamps to zero and
        // nothing panics.
        assert_eq!(canvas.ops().len(), 6);
        assert_eq!(canvas.ops()[5].path().arc_count(), 0);
    }

    #[test]
    fn test_invalid_spec_emits_nothing() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        let spec = BoxSpec::new().with_extents(Vec3::new(-1.0, 3.0, 2.0));
        assert!(render_box(&spec, &mut canvas).is_err());
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_origin_offsets_translate_on_screen() {
        let mut a = RecordingCanvas::new(200.0, 200.0);
        let mut b = RecordingCanvas::new(200.0, 200.0);
        render_box(&BoxSpec::default(), &mut a).unwrap();
        // Raising z by 1 scene unit lifts every vertex by scale pixels
        render_box(
            &BoxSpec::default().with_origin(Vec3::new(0.0, 0.0, 1.0)),
            &mut b,
        )
        .unwrap();

        let vertex = |canvas: &RecordingCanvas| match canvas.ops()[0].path().elements()[0] {
            PathElement::MoveTo(p) => p,
            _ => panic!("expected MoveTo"),
        };
        let pa = vertex(&a);
        let pb = vertex(&b);
        assert!((pa.x - pb.x).abs() < 1e-3);
        assert!((pa.y - (pb.y + 40.0)).abs() < 1e-3);
    }
}
