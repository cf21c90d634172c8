//! Bridge module - JS ↔ Rust communication
//! 
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod canvas;
mod colors;
mod console;
mod errors;
mod human;
mod session;

pub use canvas::CanvasSurface;
pub use colors::{focus_badge, focus_color_rgb, focus_colors};
pub use console::{init as init_console_logger, parse_level};
pub use errors::BridgeError;
pub use human::HumanDrawer;
pub use session::FocusOverlay;
