//! Detection result data model
//!
//! Shapes follow the detector's JSON output. Fields the overlay does not read
//! (mesh, annotations, iris, ...) are kept in `Face::extra` so they reach the
//! external drawer untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// FRAME RESULT
// ============================================================================

/// One processed video frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Detected faces, primary face first
    #[serde(default)]
    pub faces: Vec<Face>,
    /// Detector timing annotation, passed through opaque
    #[serde(default)]
    pub performance: Value,
    /// Capture timestamp (ms)
    #[serde(default)]
    pub timestamp: f64,
}

impl DetectionResult {
    /// The primary face, if any
    pub fn primary_face(&self) -> Option<&Face> {
        self.faces.first()
    }
}

/// A single detected face
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Face {
    /// Bounding box in source-video pixels
    #[serde(rename = "box")]
    pub bbox: FaceBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    /// Detection confidence (0..1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Bounding box `[x, y, width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct FaceBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FaceBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Scale from one pixel space into another
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        Self {
            x: self.x * sx,
            y: self.y * sy,
            width: self.width * sx,
            height: self.height * sy,
        }
    }
}

impl From<[f64; 4]> for FaceBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self { x, y, width, height }
    }
}

impl From<FaceBox> for [f64; 4] {
    fn from(b: FaceBox) -> Self {
        [b.x, b.y, b.width, b.height]
    }
}

// ============================================================================
// HEAD POSE + GAZE
// ============================================================================

/// Head rotation. Only angle, matrix and gaze are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub angle: Angle,
    #[serde(default)]
    pub matrix: Vec<f64>,
    #[serde(default)]
    pub gaze: Gaze,
}

/// Euler angles in radians
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Angle {
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub roll: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Gaze {
    /// Radians
    #[serde(default)]
    pub bearing: f64,
    /// 0..1
    #[serde(default)]
    pub strength: f64,
}

// ============================================================================
// SCORES
// ============================================================================

/// Externally computed focus metrics, nominally 0..100
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scores {
    /// Multi-second average, display only
    pub focus: f64,
    /// Instantaneous alignment, informational
    pub alignment: f64,
    /// Drives the live color
    pub instant: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "faces": [{
            "box": [10, 20, 100, 120],
            "score": 0.93,
            "rotation": {
                "angle": {"yaw": 0.1, "pitch": -0.2, "roll": 0.0},
                "matrix": [1, 0, 0, 0, 1, 0, 0, 0, 1],
                "gaze": {"bearing": 0.5, "strength": 0.25}
            },
            "mesh": [[1, 2, 3]],
            "id": 0
        }],
        "performance": {"total": 12},
        "timestamp": 1234.5
    }"#;

    #[test]
    fn test_parse_detector_json() {
        let result: DetectionResult = serde_json::from_str(SAMPLE).unwrap();
        let face = result.primary_face().unwrap();
        assert_eq!(face.bbox, FaceBox::new(10.0, 20.0, 100.0, 120.0));
        assert_eq!(face.score, Some(0.93));
        let rotation = face.rotation.as_ref().unwrap();
        assert!((rotation.angle.pitch + 0.2).abs() < 1e-12);
        assert_eq!(rotation.matrix.len(), 9);
        assert!((rotation.gaze.strength - 0.25).abs() < 1e-12);
        assert!(face.extra.contains_key("mesh"));
        assert_eq!(result.timestamp, 1234.5);
    }

    #[test]
    fn test_missing_optional_fields() {
        let result: DetectionResult =
            serde_json::from_str(r#"{"faces": [{"box": [0, 0, 1, 1]}]}"#).unwrap();
        let face = result.primary_face().unwrap();
        assert!(face.rotation.is_none());
        assert!(face.score.is_none());
        assert!(result.performance.is_null());
    }

    #[test]
    fn test_box_round_trips_as_array() {
        let json = serde_json::to_value(FaceBox::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json, serde_json::json!([1.0, 2.0, 3.0, 4.0]));
    }
}
