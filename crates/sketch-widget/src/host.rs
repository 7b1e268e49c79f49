//! The host bridge contract.
//!
//! The embedding application sees exactly three operations: a one-time
//! readiness signal, a preferred frame height, and a value push. The bridge
//! is an injected trait rather than a process-wide singleton so controllers
//! can be driven against a test double.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The boundary between a widget and its embedding application.
///
/// Payloads are plain JSON values; each widget defines its own typed payload
/// and serializes it before crossing the boundary.
pub trait HostBridge {
    /// The widget has mounted and is prepared to receive configuration.
    /// Called exactly once per widget lifetime.
    fn ready(&mut self);

    /// The embedding surface should resize itself to `px` pixels.
    fn set_frame_height(&mut self, px: u32);

    /// Push the widget's current value to the host.
    fn set_value(&mut self, value: Value);
}

/// The sketch canvas result payload.
///
/// Sent on explicit export, and with a null image on clear. This is the only
/// data the host ever receives from the canvas; it is never streamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchValue {
    /// PNG data URL of the rasterized canvas, or `None` after a clear.
    pub data_url: Option<String>,
    /// Number of strokes on the canvas at export time.
    pub lines_count: usize,
}

impl SketchValue {
    /// The payload reported when the host clears the canvas.
    pub fn cleared() -> Self {
        Self {
            data_url: None,
            lines_count: 0,
        }
    }
}

/// An in-memory bridge that records every call, for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    pub ready_calls: usize,
    pub frame_heights: Vec<u32>,
    pub values: Vec<Value>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently pushed value, if any.
    pub fn last_value(&self) -> Option<&Value> {
        self.values.last()
    }
}

impl HostBridge for RecordingBridge {
    fn ready(&mut self) {
        self.ready_calls += 1;
    }

    fn set_frame_height(&mut self, px: u32) {
        self.frame_heights.push(px);
    }

    fn set_value(&mut self, value: Value) {
        self.values.push(value);
    }
}
