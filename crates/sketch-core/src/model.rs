//! Stroke data model for the freehand sketch canvas.
//!
//! The drawing state is a flat, ordered list of strokes — insertion order is
//! z-order for rendering. At most one stroke is active (receiving points) at
//! a time, and while active it is always the last element. The `drawing`
//! flag lives here, next to the stroke list, so the state machine has a
//! single source of truth.

use crate::brush::StrokeOp;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Geometry ────────────────────────────────────────────────────────────

/// A 2D point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

        let byte = |i: usize| Some(hex_val(bytes[i * 2])? << 4 | hex_val(bytes[i * 2 + 1])?);
        let nibble = |i: usize| Some(hex_val(bytes[i])? * 17);

        match bytes.len() {
            3 => Some(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Some(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::rgba(byte(0)?, byte(1)?, byte(2)?, 255)),
            8 => Some(Self::rgba(byte(0)?, byte(1)?, byte(2)?, byte(3)?)),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Stroke ──────────────────────────────────────────────────────────────

/// One continuous freehand gesture: an ordered point list plus the color and
/// width captured at pointer-down. Non-empty once created; the point list
/// grows only while the stroke is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: SmallVec<[Point; 16]>,
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(start: Point, color: Color, width: f32) -> Self {
        let mut points = SmallVec::new();
        points.push(start);
        Self {
            points,
            color,
            width,
        }
    }
}

// ─── Drawing state ───────────────────────────────────────────────────────

/// The full drawing state: all strokes on the canvas, in z-order, plus the
/// single "currently drawing" flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SketchState {
    strokes: Vec<Stroke>,
    drawing: bool,
}

impl SketchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All strokes in insertion (z-) order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Append a new one-point stroke and mark it active.
    pub fn begin_stroke(&mut self, point: Point, color: Color, width: f32) {
        self.strokes.push(Stroke::new(point, color, width));
        self.drawing = true;
        log::trace!("begin stroke #{} at ({}, {})", self.strokes.len(), point.x, point.y);
    }

    /// Append a point to the active stroke. No-op when nothing is active.
    pub fn extend_stroke(&mut self, point: Point) {
        if !self.drawing {
            return;
        }
        if let Some(last) = self.strokes.last_mut() {
            last.points.push(point);
        }
    }

    /// Finish the active stroke. Idempotent.
    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Drop all strokes. An in-progress stroke is abandoned — the cleared
    /// state wins.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    /// Apply a brush-tool operation.
    pub fn apply(&mut self, op: StrokeOp) {
        match op {
            StrokeOp::Begin {
                point,
                color,
                width,
            } => self.begin_stroke(point, color, width),
            StrokeOp::Extend { point } => self.extend_stroke(point),
            StrokeOp::End => self.end_stroke(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_extend_end() {
        let mut state = SketchState::new();
        state.begin_stroke(Point::new(10.0, 10.0), Color::BLACK, 4.0);
        assert!(state.is_drawing());
        state.extend_stroke(Point::new(20.0, 10.0));
        state.extend_stroke(Point::new(20.0, 20.0));
        state.end_stroke();

        assert!(!state.is_drawing());
        assert_eq!(state.len(), 1);
        assert_eq!(state.strokes()[0].points.len(), 3);
    }

    #[test]
    fn extend_without_begin_is_noop() {
        let mut state = SketchState::new();
        state.extend_stroke(Point::new(5.0, 5.0));
        assert!(state.is_empty());

        state.begin_stroke(Point::new(0.0, 0.0), Color::BLACK, 2.0);
        state.end_stroke();
        state.extend_stroke(Point::new(5.0, 5.0));
        assert_eq!(state.strokes()[0].points.len(), 1, "ended stroke must not grow");
    }

    #[test]
    fn end_stroke_is_idempotent() {
        let mut state = SketchState::new();
        state.begin_stroke(Point::new(0.0, 0.0), Color::BLACK, 2.0);
        state.end_stroke();
        state.end_stroke();
        assert!(!state.is_drawing());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn clear_abandons_active_stroke() {
        let mut state = SketchState::new();
        state.begin_stroke(Point::new(1.0, 1.0), Color::BLACK, 2.0);
        state.clear();
        assert!(state.is_empty());
        assert!(!state.is_drawing());

        // Moves after the clear must not resurrect the stroke
        state.extend_stroke(Point::new(2.0, 2.0));
        assert!(state.is_empty());
    }

    #[test]
    fn stroke_captures_color_and_width() {
        let mut state = SketchState::new();
        let red = Color::from_hex("#FF0000").unwrap();
        state.begin_stroke(Point::new(0.0, 0.0), red, 7.5);
        let s = &state.strokes()[0];
        assert_eq!(s.color, red);
        assert_eq!(s.width, 7.5);
    }

    #[test]
    fn color_hex_roundtrip() {
        let c = Color::from_hex("#6C5CE7").unwrap();
        assert_eq!(c.to_hex(), "#6C5CE7");

        let short = Color::from_hex("#F00").unwrap();
        assert_eq!(short, Color::rgba(255, 0, 0, 255));

        let translucent = Color::from_hex("FF000080").unwrap();
        assert_eq!(translucent.a, 0x80);
        assert_eq!(translucent.to_hex(), "#FF000080");

        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
    }
}
