//! Color helpers for non-canvas UI (status badges, swatches)

use wasm_bindgen::prelude::*;

use super::errors::to_js;
use crate::color::{map_score_to_color, map_score_to_css_colors};
use crate::renderer::status_badge;

/// `{ primary, secondary }` CSS colors for a score
#[wasm_bindgen]
pub fn focus_colors(score: f64, is_calibrated: bool) -> Result<JsValue, JsValue> {
    Ok(to_js(&map_score_to_css_colors(score, is_calibrated))?)
}

/// `[r, g, b]` target color for a score
#[wasm_bindgen]
pub fn focus_color_rgb(score: f64, is_calibrated: bool) -> Vec<u8> {
    map_score_to_color(score, is_calibrated).channels().to_vec()
}

/// `{ color, label }` for the badge next to the video
#[wasm_bindgen]
pub fn focus_badge(focus_score: f64, is_calibrated: bool) -> Result<JsValue, JsValue> {
    Ok(to_js(&status_badge(focus_score, is_calibrated))?)
}
