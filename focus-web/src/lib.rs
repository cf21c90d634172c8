//! Focus Web - live focus feedback overlay for a mirrored webcam feed
//! 
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
pub mod color;
pub mod config;
pub mod detection;
pub mod error;
pub mod renderer;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen items for JS access
pub use bridge::{
    focus_badge, focus_color_rgb, focus_colors, BridgeError, CanvasSurface, FocusOverlay,
    HumanDrawer,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    bridge::init_console_logger(::log::LevelFilter::Info);
    console_log!("✅ Focus overlay module loaded");
}

/// Change console log verbosity ("off", "error", "warn", "info", "debug", "trace")
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    bridge::init_console_logger(bridge::parse_level(level));
}
