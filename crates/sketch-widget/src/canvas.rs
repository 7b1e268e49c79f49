//! The freehand sketch canvas controller.
//!
//! Owns the drawing state, the brush tool, and the host configuration, and
//! talks to the injected [`HostBridge`]. All interaction from the embedding
//! layer goes through this struct: configuration updates, pointer and touch
//! events, and the explicit export action.

use crate::host::{HostBridge, SketchValue};
use sketch_core::{BrushTool, CanvasConfig, InputEvent, SketchState};
use sketch_raster::render_data_url;

/// Fixed vertical allowance added to the canvas height when sizing the
/// embedding frame, so the export control below the canvas stays visible.
pub const CHROME_HEIGHT: u32 = 60;

/// The sketch widget controller.
pub struct SketchCanvas<B: HostBridge> {
    bridge: B,
    config: CanvasConfig,
    state: SketchState,
    brush: BrushTool,
    mounted: bool,
    /// Previous value of the host's clear flag; a clear fires once per
    /// false→true transition, not on every update while it stays true.
    prev_clear: bool,
}

impl<B: HostBridge> SketchCanvas<B> {
    /// Create an unmounted canvas with the default host configuration.
    pub fn new(bridge: B) -> Self {
        Self::with_config(bridge, CanvasConfig::default())
    }

    pub fn with_config(bridge: B, config: CanvasConfig) -> Self {
        Self {
            bridge,
            config,
            state: SketchState::new(),
            brush: BrushTool::new(),
            mounted: false,
            // Starts false so a config whose clear flag is already true
            // still counts as a rising edge on mount.
            prev_clear: false,
        }
    }

    /// Signal readiness and report the preferred frame height. Idempotent:
    /// repeated mounts never repeat the readiness signal.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.bridge.ready();
        self.bridge.set_frame_height(self.config.height + CHROME_HEIGHT);
        log::debug!(
            "mounted {}x{} canvas",
            self.config.width,
            self.config.height
        );
        let clear = self.config.clear;
        self.apply_clear_edge(clear);
    }

    /// Re-evaluate host configuration.
    ///
    /// A height change re-reports the preferred frame height. A clear flag
    /// transitioning to `true` empties the drawing state and immediately
    /// reports the null value; a sustained flag fires nothing further until
    /// it drops back to `false`.
    pub fn set_config(&mut self, config: CanvasConfig) {
        if config.height != self.config.height {
            self.bridge.set_frame_height(config.height + CHROME_HEIGHT);
        }

        let clear = config.clear;
        self.config = config;
        self.apply_clear_edge(clear);
    }

    fn apply_clear_edge(&mut self, clear: bool) {
        let edge = clear && !self.prev_clear;
        self.prev_clear = clear;
        if edge {
            self.state.clear();
            self.report(SketchValue::cleared());
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    // ─── Input routing ───────────────────────────────────────────────────

    /// Handle pointer down at surface-relative coordinates.
    /// Returns true if the drawing state visibly changed.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.route(InputEvent::from_pointer_down(x, y))
    }

    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.route(InputEvent::from_pointer_move(x, y))
    }

    pub fn handle_pointer_up(&mut self) -> bool {
        self.route(InputEvent::from_pointer_up())
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.route(InputEvent::from_pointer_leave())
    }

    /// Touch events map onto the corresponding pointer events; there is no
    /// separate touch logic path.
    pub fn handle_touch_start(&mut self, x: f32, y: f32) -> bool {
        self.route(InputEvent::from_touch_start(x, y))
    }

    pub fn handle_touch_move(&mut self, x: f32, y: f32) -> bool {
        self.route(InputEvent::from_touch_move(x, y))
    }

    pub fn handle_touch_end(&mut self) -> bool {
        self.route(InputEvent::from_touch_end())
    }

    fn route(&mut self, event: InputEvent) -> bool {
        let color = self.config.stroke_color();
        let width = self.config.stroke_width;
        match self.brush.handle(&event, color, width) {
            Some(op) => {
                let visible = !matches!(op, sketch_core::StrokeOp::End);
                self.state.apply(op);
                visible
            }
            None => false,
        }
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// Rasterize the current drawing state and push it to the host as
    /// `{ dataUrl, linesCount }`.
    ///
    /// A no-op when the widget is not mounted: with no rendering surface
    /// there is nothing to rasterize, and no value is reported.
    pub fn export(&mut self) {
        if !self.mounted {
            log::debug!("export ignored: canvas not mounted");
            return;
        }
        match render_data_url(&self.state, self.config.width, self.config.height) {
            Ok(data_url) => {
                let value = SketchValue {
                    data_url: Some(data_url),
                    lines_count: self.state.len(),
                };
                self.report(value);
            }
            Err(e) => log::warn!("export failed, nothing reported: {e}"),
        }
    }

    fn report(&mut self, value: SketchValue) {
        match serde_json::to_value(&value) {
            Ok(json) => self.bridge.set_value(json),
            Err(e) => log::error!("failed to serialize value payload: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingBridge;

    #[test]
    fn mount_reports_ready_once_and_frame_height() {
        let mut canvas = SketchCanvas::new(RecordingBridge::new());
        canvas.mount();
        canvas.mount();

        let bridge = canvas.bridge();
        assert_eq!(bridge.ready_calls, 1);
        assert_eq!(bridge.frame_heights, vec![520 + CHROME_HEIGHT]);
    }

    #[test]
    fn height_change_re_reports_frame_height() {
        let mut canvas = SketchCanvas::new(RecordingBridge::new());
        canvas.mount();

        let mut config = canvas.config().clone();
        config.height = 700;
        canvas.set_config(config.clone());
        // Same height again: no extra report
        canvas.set_config(config);

        assert_eq!(
            canvas.bridge().frame_heights,
            vec![520 + CHROME_HEIGHT, 700 + CHROME_HEIGHT]
        );
    }

    #[test]
    fn export_before_mount_is_silent() {
        let mut canvas = SketchCanvas::new(RecordingBridge::new());
        canvas.handle_pointer_down(10.0, 10.0);
        canvas.handle_pointer_up();
        canvas.export();
        assert!(canvas.bridge().values.is_empty());
    }

    #[test]
    fn strokes_use_configured_color_and_width() {
        let config = CanvasConfig {
            color: "#FF0000".to_string(),
            stroke_width: 9.0,
            ..Default::default()
        };
        let mut canvas = SketchCanvas::with_config(RecordingBridge::new(), config);
        canvas.handle_pointer_down(1.0, 1.0);

        let stroke = &canvas.state().strokes()[0];
        assert_eq!(stroke.color.to_hex(), "#FF0000");
        assert_eq!(stroke.width, 9.0);
    }
}
