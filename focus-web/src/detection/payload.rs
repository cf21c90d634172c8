//! Result payload for the external face drawer
//!
//! Only `face` is populated. Width/height are the displayed size so that
//! whatever the drawer produces lines up with the video as shown.

use serde::Serialize;
use serde_json::Value;

use super::types::{DetectionResult, Face};

#[derive(Debug, Clone, Serialize)]
pub struct DrawPayload {
    pub face: Vec<Face>,
    pub body: Vec<Value>,
    pub hand: Vec<Value>,
    pub gesture: Vec<Value>,
    pub object: Vec<Value>,
    pub persons: Vec<Value>,
    pub performance: Value,
    pub timestamp: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawPayload {
    /// Build from a detection result at the given display size
    pub fn from_result(result: &DetectionResult, display_width: f64, display_height: f64) -> Self {
        Self {
            face: result.faces.clone(),
            body: Vec::new(),
            hand: Vec::new(),
            gesture: Vec::new(),
            object: Vec::new(),
            persons: Vec::new(),
            performance: result.performance.clone(),
            timestamp: result.timestamp,
            width: display_width,
            height: display_height,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
