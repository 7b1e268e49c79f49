//! Drive the sketch canvas headlessly: scripted gesture in, PNG out.
//!
//! Run with `cargo run -p sketch-widget --example headless_sketch`.
//! Writes `sketch.png` to the current directory and prints every host
//! bridge call, so the full widget flow is visible without an embedder.

use serde_json::Value;
use sketch_core::CanvasConfig;
use sketch_widget::{HostBridge, SketchCanvas};

/// A host bridge that narrates calls and saves the exported image.
struct StdoutHost;

impl HostBridge for StdoutHost {
    fn ready(&mut self) {
        println!("host <- ready");
    }

    fn set_frame_height(&mut self, px: u32) {
        println!("host <- set_frame_height({px})");
    }

    fn set_value(&mut self, value: Value) {
        let lines = value["linesCount"].as_u64().unwrap_or(0);
        match value["dataUrl"].as_str() {
            Some(url) => {
                println!("host <- set_value: {lines} stroke(s), {} chars of data URL", url.len());
                let b64 = url.trim_start_matches("data:image/png;base64,");
                use base64::Engine as _;
                let png = base64::engine::general_purpose::STANDARD
                    .decode(b64)
                    .expect("exported data URL is valid base64");
                std::fs::write("sketch.png", png).expect("write sketch.png");
                println!("wrote sketch.png");
            }
            None => println!("host <- set_value: cleared"),
        }
    }
}

fn main() {
    env_logger::init();

    let config = CanvasConfig {
        width: 400,
        height: 300,
        color: "#6C5CE7".to_string(),
        stroke_width: 6.0,
        ..Default::default()
    };
    let mut canvas = SketchCanvas::with_config(StdoutHost, config);
    canvas.mount();

    // A zig-zag gesture
    canvas.handle_pointer_down(40.0, 60.0);
    for i in 1..=12 {
        let x = 40.0 + i as f32 * 26.0;
        let y = if i % 2 == 0 { 60.0 } else { 220.0 };
        canvas.handle_pointer_move(x, y);
    }
    canvas.handle_pointer_up();

    // A second, thinner stroke drawn by touch
    canvas.handle_touch_start(60.0, 150.0);
    canvas.handle_touch_move(340.0, 150.0);
    canvas.handle_touch_end();

    canvas.export();
}
