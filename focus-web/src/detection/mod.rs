//! Detection module - per-frame face/gaze results from the external detector
//!
//! Re-exports only. All logic in submodules.

mod payload;
mod types;
mod units;

pub use payload::DrawPayload;
pub use types::{Angle, DetectionResult, Face, FaceBox, Gaze, Rotation, Scores};
pub use units::{round_half_up, to_degrees_rounded, to_percent_rounded};
