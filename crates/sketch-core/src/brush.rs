//! The freehand brush tool.
//!
//! Translates normalized input events into `StrokeOp`s that are applied to
//! the `SketchState`. The tool keeps its own gesture flag: move events that
//! arrive outside a down…up window (hover, re-entry after leave) must not
//! extend anything.

use crate::input::InputEvent;
use crate::model::{Color, Point};

/// A single mutation of the drawing state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeOp {
    /// Start a new stroke with the configured color and width.
    Begin {
        point: Point,
        color: Color,
        width: f32,
    },
    /// Append a point to the active stroke.
    Extend { point: Point },
    /// Finish the active stroke.
    End,
}

/// Freehand drawing tool. Color and width are sampled from the current
/// configuration at pointer-down and captured into the stroke.
#[derive(Debug, Default)]
pub struct BrushTool {
    drawing: bool,
}

impl BrushTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Handle an input event, returning the resulting state operation.
    pub fn handle(&mut self, event: &InputEvent, color: Color, width: f32) -> Option<StrokeOp> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.drawing = true;
                Some(StrokeOp::Begin {
                    point: Point::new(x, y),
                    color,
                    width,
                })
            }
            InputEvent::PointerMove { x, y } => {
                if !self.drawing {
                    return None;
                }
                Some(StrokeOp::Extend {
                    point: Point::new(x, y),
                })
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.drawing = false;
                Some(StrokeOp::End)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width4(tool: &mut BrushTool, event: InputEvent) -> Option<StrokeOp> {
        tool.handle(&event, Color::BLACK, 4.0)
    }

    #[test]
    fn down_move_up_produces_begin_extend_end() {
        let mut tool = BrushTool::new();

        let op = width4(&mut tool, InputEvent::from_pointer_down(10.0, 10.0));
        assert!(matches!(op, Some(StrokeOp::Begin { .. })));
        assert!(tool.is_drawing());

        let op = width4(&mut tool, InputEvent::from_pointer_move(20.0, 10.0));
        assert_eq!(
            op,
            Some(StrokeOp::Extend {
                point: Point::new(20.0, 10.0)
            })
        );

        let op = width4(&mut tool, InputEvent::from_pointer_up());
        assert_eq!(op, Some(StrokeOp::End));
        assert!(!tool.is_drawing());
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut tool = BrushTool::new();
        assert_eq!(width4(&mut tool, InputEvent::from_pointer_move(5.0, 5.0)), None);
    }

    #[test]
    fn leave_ends_the_gesture() {
        let mut tool = BrushTool::new();
        width4(&mut tool, InputEvent::from_pointer_down(0.0, 0.0));
        width4(&mut tool, InputEvent::from_pointer_leave());
        assert!(!tool.is_drawing());

        // Re-entry moves must not extend
        assert_eq!(width4(&mut tool, InputEvent::from_pointer_move(9.0, 9.0)), None);
    }

    #[test]
    fn begin_captures_configured_color_and_width() {
        let mut tool = BrushTool::new();
        let red = Color::rgba(255, 0, 0, 255);
        let op = tool.handle(&InputEvent::from_pointer_down(1.0, 2.0), red, 9.0);
        match op {
            Some(StrokeOp::Begin {
                point,
                color,
                width,
            }) => {
                assert_eq!(point, Point::new(1.0, 2.0));
                assert_eq!(color, red);
                assert_eq!(width, 9.0);
            }
            other => panic!("expected Begin, got {other:?}"),
        }
    }
}
