//! In-memory drawing surface
//!
//! Tracks the transform stack like a canvas context and records every draw
//! call with both its authored coordinates and where it lands on the backing
//! store. Used for headless rendering and tests.

use super::surface::Surface2d;
use super::transform::Transform2d;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Bounding rect of this rect after `transform`
    fn transformed(&self, transform: &Transform2d) -> Self {
        let (x1, y1) = transform.apply(self.x, self.y);
        let (x2, y2) = transform.apply(self.x + self.width, self.y + self.height);
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { device: Rect },
    StrokeRect { authored: Rect, device: Rect, style: String, line_width: f64 },
    FillRect { authored: Rect, device: Rect, style: String },
    FillText { text: String, authored: (f64, f64), device: (f64, f64), style: String, font: String },
}

#[derive(Debug, Clone)]
struct PaintState {
    transform: Transform2d,
    stroke_style: String,
    fill_style: String,
    line_width: f64,
    font: String,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            transform: Transform2d::identity(),
            stroke_style: "#000000".to_string(),
            fill_style: "#000000".to_string(),
            line_width: 1.0,
            font: "10px sans-serif".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    backing: (u32, u32),
    css_size: (f64, f64),
    state: PaintState,
    stack: Vec<PaintState>,
    commands: Vec<DrawCommand>,
    resizes: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn css_size(&self) -> (f64, f64) {
        self.css_size
    }

    pub fn transform(&self) -> Transform2d {
        self.state.transform
    }

    /// Depth of the save stack
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of backing-store resizes so far
    pub fn resize_count(&self) -> usize {
        self.resizes
    }

    pub fn stroke_rects(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface2d for RecordingSurface {
    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        // Resizing a canvas drops its content and context state
        self.backing = (width, height);
        self.state = PaintState::default();
        self.stack.clear();
        self.resizes += 1;
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        self.css_size = (width, height);
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.state.transform = self.state.transform.scale(x, y);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.state.transform = self.state.transform.translate(x, y);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let device = Rect::new(x, y, width, height).transformed(&self.state.transform);
        self.commands.push(DrawCommand::Clear { device });
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.state.stroke_style = style.to_string();
    }

    fn set_fill_style(&mut self, style: &str) {
        self.state.fill_style = style.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let authored = Rect::new(x, y, width, height);
        self.commands.push(DrawCommand::StrokeRect {
            authored,
            device: authored.transformed(&self.state.transform),
            style: self.state.stroke_style.clone(),
            line_width: self.state.line_width,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let authored = Rect::new(x, y, width, height);
        self.commands.push(DrawCommand::FillRect {
            authored,
            device: authored.transformed(&self.state.transform),
            style: self.state.fill_style.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            authored: (x, y),
            device: self.state.transform.apply(x, y),
            style: self.state.fill_style.clone(),
            font: self.state.font.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_resets_transform_and_stack() {
        let mut surface = RecordingSurface::new();
        surface.scale(2.0, 2.0);
        surface.save();
        surface.set_backing_size(100, 100);
        assert_eq!(surface.transform(), Transform2d::identity());
        assert_eq!(surface.save_depth(), 0);
    }

    #[test]
    fn test_restore_pops_transform() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.translate(800.0, 0.0);
        surface.scale(-1.0, 1.0);
        surface.fill_text("a", 100.0, 10.0);
        surface.restore();
        surface.fill_text("b", 100.0, 10.0);

        match &surface.commands()[..] {
            [DrawCommand::FillText { device: d1, .. }, DrawCommand::FillText { device: d2, .. }] => {
                assert_eq!(*d1, (700.0, 10.0));
                assert_eq!(*d2, (100.0, 10.0));
            }
            other => panic!("unexpected commands: {:?}", other),
        }
    }

    #[test]
    fn test_mirrored_rect_is_normalized() {
        let mut surface = RecordingSurface::new();
        surface.translate(800.0, 0.0);
        surface.scale(-1.0, 1.0);
        surface.stroke_rect(10.0, 20.0, 100.0, 50.0);
        match &surface.commands()[0] {
            DrawCommand::StrokeRect { device, .. } => {
                assert_eq!(*device, Rect::new(690.0, 20.0, 100.0, 50.0));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
