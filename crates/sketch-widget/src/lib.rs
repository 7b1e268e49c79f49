//! Widget controllers for the embeddable drawing components.
//!
//! Two widgets share one narrow host contract (see [`host::HostBridge`]):
//!
//! - [`SketchCanvas`] — the freehand stroke canvas. Owns the drawing state,
//!   routes pointer/touch input through the brush tool, and pushes a
//!   rasterized snapshot to the host on export.
//! - [`board::BoardFrame`] — the embedded vector-board editor. The editor
//!   itself is an external collaborator; the frame only forwards its scene
//!   to an injected exporter and reports the encoded snapshot (or the
//!   export error) back to the host.

pub mod board;
pub mod canvas;
pub mod host;

pub use board::{BoardConfig, BoardFrame, BoardValue, SceneExporter};
pub use canvas::{CHROME_HEIGHT, SketchCanvas};
pub use host::{HostBridge, RecordingBridge, SketchValue};
