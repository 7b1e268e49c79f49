//! Host-supplied canvas configuration.
//!
//! The embedding host passes configuration as a camelCase JSON object and
//! may re-send it at any time; the widget re-evaluates it on every update
//! and never writes it back.

use crate::model::Color;
use serde::{Deserialize, Serialize};

/// Canvas configuration, read-only to the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Stroke color as a hex string (e.g. `#1A2B3C`).
    pub color: String,
    /// Stroke width in pixels.
    pub stroke_width: f32,
    /// When transitioning to `true`, the widget empties the drawing state
    /// and reports a null value to the host.
    pub clear: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 520,
            color: "#000000".to_string(),
            stroke_width: 4.0,
            clear: false,
        }
    }
}

impl CanvasConfig {
    /// Parse a configuration object from the host's JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The configured stroke color, falling back to black on an
    /// unparseable hex string.
    pub fn stroke_color(&self) -> Color {
        Color::from_hex(&self.color).unwrap_or_else(|| {
            log::warn!("unparseable color {:?}, falling back to black", self.color);
            Color::BLACK
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_host_contract() {
        let cfg = CanvasConfig::default();
        assert_eq!(cfg.width, 900);
        assert_eq!(cfg.height, 520);
        assert_eq!(cfg.color, "#000000");
        assert_eq!(cfg.stroke_width, 4.0);
        assert!(!cfg.clear);
    }

    #[test]
    fn parses_partial_camel_case_json() {
        let cfg = CanvasConfig::from_json(r##"{"strokeWidth": 8, "color": "#FF0000"}"##).unwrap();
        assert_eq!(cfg.stroke_width, 8.0);
        assert_eq!(cfg.stroke_color(), Color::rgba(255, 0, 0, 255));
        // Unspecified fields keep their defaults
        assert_eq!(cfg.width, 900);
        assert_eq!(cfg.height, 520);
    }

    #[test]
    fn bad_color_falls_back_to_black() {
        let cfg = CanvasConfig {
            color: "not-a-color".to_string(),
            ..Default::default()
        };
        assert_eq!(cfg.stroke_color(), Color::BLACK);
    }
}
