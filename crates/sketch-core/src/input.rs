//! Input abstraction layer.
//!
//! Normalizes mouse and touch events into a unified `InputEvent` enum so
//! the brush tool has a single logic path for both device classes.

use crate::model::Point;

/// A normalized input event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved (mouse move, touch move).
    PointerMove { x: f32, y: f32 },

    /// Pointer released (mouse up, touch end).
    PointerUp,

    /// Pointer left the drawing surface.
    PointerLeave,
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up() -> Self {
        Self::PointerUp
    }

    pub fn from_pointer_leave() -> Self {
        Self::PointerLeave
    }

    /// Touch-start maps onto pointer-down.
    pub fn from_touch_start(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    /// Touch-move maps onto pointer-move.
    pub fn from_touch_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    /// Touch-end maps onto pointer-up.
    pub fn from_touch_end() -> Self {
        Self::PointerUp
    }

    /// Extract the surface-relative position, if this event carries one.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } => Some(Point::new(*x, *y)),
            Self::PointerUp | Self::PointerLeave => None,
        }
    }
}
