//! Error types shared by the renderer core

use thiserror::Error;

/// Failure of the external face drawer. Always handled by the renderer.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("drawer not ready")]
    NotReady,
    #[error("payload rejected: {0}")]
    Payload(String),
    #[error("drawer threw: {0}")]
    Js(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid overlay config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("smoothing_factor must be in (0, 1), got {0}")]
    SmoothingFactor(f64),
}
