//! Color module - focus score to color mapping and cross-frame smoothing
//!
//! Re-exports only. All logic in submodules.

mod gradient;
mod smoothing;

pub use gradient::{
    lerp_rgb, map_score_to_color, map_score_to_css_colors, score_tones,
    CssColors, Rgb, CALIBRATION_COLOR, PRIMARY_ALPHA, SECONDARY_ALPHA,
};
pub use smoothing::{SmoothedColor, SECONDARY_OFFSET, SMOOTHING_FACTOR};
