//! Bridge errors and JS value conversion helpers

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{ConfigError, DrawError};

/// Errors surfaced to JavaScript callers
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Canvas has no 2d context")]
    NoContext,
    #[error("Invalid detection result: {0}")]
    BadResult(String),
    #[error("Could not convert value for JS: {0}")]
    Convert(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Serialize through JSON into a plain JS object
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, BridgeError> {
    let json = serde_json::to_string(value).map_err(|e| BridgeError::Convert(e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|e| BridgeError::Convert(js_message(&e)))
}

/// Best-effort readable message for a thrown JS value
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn js_draw_error(value: JsValue) -> DrawError {
    DrawError::Js(js_message(&value))
}
