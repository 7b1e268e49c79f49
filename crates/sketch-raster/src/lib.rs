pub mod export;
pub mod paint;

pub use export::{ExportError, render_data_url, render_pixmap, render_png};
pub use paint::{StrokeVisual, build_display_list};
