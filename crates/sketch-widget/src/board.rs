//! The embedded vector-board widget.
//!
//! The board editor itself is an external collaborator; its only contract
//! with this system is "accepts a scene description, emits a rendered
//! image". The frame here wires that contract to the host bridge: it holds
//! an opaque scene, asks the injected [`SceneExporter`] for a PNG when the
//! host requests an export, and reports either the encoded snapshot or the
//! export error.

use crate::host::HostBridge;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sketch_raster::ExportError;
use sketch_raster::export::DATA_URL_PREFIX;

/// Host configuration for the board frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub read_only: bool,
    pub theme: String,
    /// Rising edge triggers a snapshot export.
    pub export_requested: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 520,
            read_only: false,
            theme: "light".to_string(),
            export_requested: false,
        }
    }
}

/// Renders an opaque scene description into a PNG. Implemented by the
/// embedded editor; this crate never looks inside the scene.
pub trait SceneExporter {
    fn export_png(&mut self, scene: &Value) -> Result<Vec<u8>, ExportError>;
}

/// Result payload for the board widget: a snapshot on success, the error
/// string on export failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoardValue {
    #[serde(rename_all = "camelCase")]
    Image { data_url: String },
    Error { error: String },
}

/// Controller wiring the embedded editor to the host bridge.
pub struct BoardFrame<B: HostBridge, E: SceneExporter> {
    bridge: B,
    exporter: E,
    config: BoardConfig,
    scene: Value,
    mounted: bool,
    applied_initial: bool,
    prev_export: bool,
}

impl<B: HostBridge, E: SceneExporter> BoardFrame<B, E> {
    pub fn new(bridge: B, exporter: E) -> Self {
        Self::with_config(bridge, exporter, BoardConfig::default())
    }

    pub fn with_config(bridge: B, exporter: E, config: BoardConfig) -> Self {
        let prev_export = config.export_requested;
        Self {
            bridge,
            exporter,
            config,
            scene: Value::Null,
            mounted: false,
            applied_initial: false,
            prev_export,
        }
    }

    /// Signal readiness (once) and report the configured height. The board
    /// hosts its own controls, so no chrome allowance is added.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.bridge.ready();
        self.bridge.set_frame_height(self.config.height);
    }

    /// Apply the host's initial scene. Applied exactly once — later calls
    /// are ignored to avoid update loops with the editor's own state.
    pub fn set_scene(&mut self, scene: Value) {
        if self.applied_initial {
            return;
        }
        self.scene = scene;
        self.applied_initial = true;
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Re-evaluate host configuration. An `export_requested` flag
    /// transitioning to `true` exports a snapshot of the current scene.
    pub fn set_config(&mut self, config: BoardConfig) {
        if config.height != self.config.height {
            self.bridge.set_frame_height(config.height);
        }

        let export_edge = config.export_requested && !self.prev_export;
        self.prev_export = config.export_requested;
        self.config = config;

        if export_edge {
            self.export_snapshot();
        }
    }

    /// Ask the editor for a PNG of the current scene and push the result.
    /// Exporter failure is caught and reported to the host as `{ error }`.
    fn export_snapshot(&mut self) {
        let value = match self.exporter.export_png(&self.scene) {
            Ok(png) => BoardValue::Image {
                data_url: format!("{DATA_URL_PREFIX}{}", STANDARD.encode(png)),
            },
            Err(e) => {
                log::warn!("board export failed: {e}");
                BoardValue::Error {
                    error: e.to_string(),
                }
            }
        };
        match serde_json::to_value(&value) {
            Ok(json) => self.bridge.set_value(json),
            Err(e) => log::error!("failed to serialize board payload: {e}"),
        }
    }
}
