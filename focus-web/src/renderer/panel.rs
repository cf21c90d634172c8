//! Diagnostics text panel shown while calibrating
//!
//! Head pose, gaze, face confidence and FPS in the top-left corner on a
//! semi-transparent background. Drawn unmirrored.

use super::surface::Surface2d;
use crate::config::PanelSettings;
use crate::detection::{to_degrees_rounded, to_percent_rounded, DetectionResult};

/// Text lines for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsPanel {
    lines: Vec<String>,
}

impl DiagnosticsPanel {
    /// Build lines for the primary face. `None` when no face is present.
    ///
    /// Pose and gaze lines need rotation data; confidence (missing = 0%)
    /// and FPS are always shown.
    pub fn build(result: &DetectionResult, fps: f64) -> Option<Self> {
        let face = result.primary_face()?;
        let mut lines = Vec::with_capacity(4);

        if let Some(rotation) = &face.rotation {
            lines.push(format!(
                "Yaw: {}\u{00B0}  Pitch: {}\u{00B0}  Roll: {}\u{00B0}",
                to_degrees_rounded(rotation.angle.yaw),
                to_degrees_rounded(rotation.angle.pitch),
                to_degrees_rounded(rotation.angle.roll),
            ));
            lines.push(format!(
                "Gaze: {}\u{00B0} ({}%)",
                to_degrees_rounded(rotation.gaze.bearing),
                to_percent_rounded(rotation.gaze.strength),
            ));
        }

        lines.push(format!("Face: {}%", to_percent_rounded(face.score.unwrap_or(0.0))));
        lines.push(format!("FPS: {}", fps));

        Some(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Background height: one line height per line plus padding top and bottom
    pub fn height(&self, settings: &PanelSettings) -> f64 {
        self.lines.len() as f64 * settings.line_height + settings.padding * 2.0
    }

    pub fn draw<S: Surface2d>(&self, surface: &mut S, settings: &PanelSettings) {
        let origin = settings.origin;

        surface.set_fill_style(&settings.background);
        surface.fill_rect(origin, origin, settings.width, self.height(settings));

        surface.set_fill_style(&settings.text_color);
        surface.set_font(&settings.font);
        for (i, line) in self.lines.iter().enumerate() {
            // Baseline sits 4px above the bottom of each line slot
            let y = origin + settings.padding + (i + 1) as f64 * settings.line_height - 4.0;
            surface.fill_text(line, origin + settings.padding, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayConfig;
    use crate::detection::{Angle, Face, FaceBox, Gaze, Rotation};
    use crate::renderer::recording::{DrawCommand, Rect, RecordingSurface};

    fn face(rotation: Option<Rotation>, score: Option<f64>) -> DetectionResult {
        DetectionResult {
            faces: vec![Face {
                bbox: FaceBox::new(0.0, 0.0, 10.0, 10.0),
                rotation,
                score,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn rotation() -> Rotation {
        Rotation {
            angle: Angle { yaw: 1.5708, pitch: -1.5708, roll: 0.0 },
            matrix: vec![],
            gaze: Gaze { bearing: 0.7854, strength: 0.456 },
        }
    }

    #[test]
    fn test_full_panel_has_four_lines() {
        let panel = DiagnosticsPanel::build(&face(Some(rotation()), Some(0.93)), 30.0).unwrap();
        assert_eq!(
            panel.lines(),
            &[
                "Yaw: 90°  Pitch: -90°  Roll: 0°".to_string(),
                "Gaze: 45° (46%)".to_string(),
                "Face: 93%".to_string(),
                "FPS: 30".to_string(),
            ]
        );
        let settings = OverlayConfig::default().panel;
        assert_eq!(panel.height(&settings), 88.0);
    }

    #[test]
    fn test_no_rotation_keeps_confidence_and_fps() {
        let panel = DiagnosticsPanel::build(&face(None, None), 24.5).unwrap();
        assert_eq!(panel.lines(), &["Face: 0%".to_string(), "FPS: 24.5".to_string()]);
    }

    #[test]
    fn test_no_face_no_panel() {
        assert!(DiagnosticsPanel::build(&DetectionResult::default(), 30.0).is_none());
    }

    #[test]
    fn test_draw_layout() {
        let panel = DiagnosticsPanel::build(&face(Some(rotation()), Some(0.5)), 60.0).unwrap();
        let settings = OverlayConfig::default().panel;
        let mut surface = RecordingSurface::new();
        panel.draw(&mut surface, &settings);

        let commands = surface.commands();
        assert_eq!(commands.len(), 5);
        match &commands[0] {
            DrawCommand::FillRect { authored, style, .. } => {
                assert_eq!(*authored, Rect::new(6.0, 6.0, 280.0, 88.0));
                assert_eq!(style, "rgba(0, 0, 0, 0.6)");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        match &commands[1] {
            DrawCommand::FillText { authored, style, font, .. } => {
                assert_eq!(*authored, (14.0, 28.0));
                assert_eq!(style, "rgba(0, 255, 128, 0.9)");
                assert_eq!(font, "13px monospace");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        match &commands[4] {
            DrawCommand::FillText { authored, .. } => assert_eq!(*authored, (14.0, 82.0)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
