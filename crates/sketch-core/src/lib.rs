pub mod brush;
pub mod config;
pub mod input;
pub mod model;

pub use brush::{BrushTool, StrokeOp};
pub use config::CanvasConfig;
pub use input::InputEvent;
pub use model::{Color, Point, SketchState, Stroke};
