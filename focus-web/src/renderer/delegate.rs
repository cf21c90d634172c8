//! External face drawer capability
//!
//! The detector library draws the face mesh, points and gaze arrows. The
//! renderer only sees this narrow interface: a mutable option bag and an
//! async "draw all" that may fail.

use std::future::Future;

use serde::Serialize;

use super::surface::Surface2d;
use crate::config::DrawerSettings;
use crate::detection::DrawPayload;
use crate::error::DrawError;

/// Style options read by the external drawer on every call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawOptions {
    pub color: String,
    pub label_color: String,
    pub line_width: f64,
    pub draw_points: bool,
    pub draw_polygons: bool,
    pub draw_boxes: bool,
    pub fill_polygons: bool,
    pub use_depth: bool,
    pub use_curves: bool,
    pub draw_labels: bool,
    pub font: String,
}

impl DrawOptions {
    /// Set the per-frame style: mesh lines and points on, boxes and fill
    /// off, labels only while calibrating.
    pub fn configure(&mut self, primary: &str, secondary: &str, calibrated: bool, style: &DrawerSettings) {
        self.color = primary.to_string();
        self.label_color = secondary.to_string();
        self.line_width = style.line_width;
        self.draw_points = true;
        self.draw_polygons = true;
        self.draw_boxes = false;
        self.fill_polygons = false;
        self.use_depth = false;
        self.use_curves = true;
        self.draw_labels = !calibrated;
        self.font = style.font.clone();
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            color: String::new(),
            label_color: String::new(),
            line_width: 1.0,
            draw_points: false,
            draw_polygons: false,
            draw_boxes: true,
            fill_polygons: false,
            use_depth: false,
            use_curves: false,
            draw_labels: true,
            font: String::new(),
        }
    }
}

/// Draws detector results onto a surface of type `S`
pub trait FaceDrawer<S: Surface2d> {
    fn options_mut(&mut self) -> &mut DrawOptions;

    /// Draw everything in `payload`. May suspend; may fail.
    fn draw_all(
        &mut self,
        surface: &mut S,
        payload: &DrawPayload,
    ) -> impl Future<Output = Result<(), DrawError>>;
}
