//! Drawing state → stroked-path display list.
//!
//! A pure function of the `SketchState`: one display-list entry per stroke,
//! in insertion (z-) order. Each stroke becomes an open polyline — no curve
//! smoothing — stroked with round caps and round joins in its captured
//! color and width.

use sketch_core::model::{Color, SketchState, Stroke};
use tiny_skia::{LineCap, LineJoin, Path, PathBuilder};

/// One renderable stroke: the flattened path plus its paint parameters.
#[derive(Debug, Clone)]
pub struct StrokeVisual {
    /// The open polyline through the stroke's points. `None` for a
    /// single-point stroke, which has no segments to stroke (a click
    /// without movement leaves no mark, as on the original canvas).
    pub path: Option<Path>,
    pub color: Color,
    pub stroke: tiny_skia::Stroke,
}

/// Build the ordered display list for the whole drawing state.
pub fn build_display_list(state: &SketchState) -> Vec<StrokeVisual> {
    state.strokes().iter().map(build_stroke).collect()
}

fn build_stroke(stroke: &Stroke) -> StrokeVisual {
    let mut pb = PathBuilder::with_capacity(stroke.points.len() + 1, stroke.points.len() + 1);
    let mut points = stroke.points.iter();
    if let Some(first) = points.next() {
        pb.move_to(first.x, first.y);
    }
    for p in points {
        pb.line_to(p.x, p.y);
    }

    StrokeVisual {
        // finish() rejects a lone MoveTo, so the degenerate case folds
        // into None here.
        path: pb.finish(),
        color: stroke.color,
        stroke: tiny_skia::Stroke {
            width: stroke.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..tiny_skia::Stroke::default()
        },
    }
}

pub(crate) fn to_skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}
