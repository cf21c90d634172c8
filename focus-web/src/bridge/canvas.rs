//! `Surface2d` over an HTML canvas 2D context

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::errors::{js_message, BridgeError};
use crate::renderer::Surface2d;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BridgeError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| BridgeError::NoContext)?
            .ok_or(BridgeError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BridgeError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

/// Canvas calls only throw on bad arguments; log and keep drawing
fn check(call: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("canvas {} failed: {}", call, js_message(&err));
    }
}

impl Surface2d for CanvasSurface {
    fn backing_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        let style = self.canvas.style();
        check("style.width", style.set_property("width", &format!("{}px", width)));
        check("style.height", style.set_property("height", &format!("{}px", height)));
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn scale(&mut self, x: f64, y: f64) {
        check("scale", self.ctx.scale(x, y));
    }

    fn translate(&mut self, x: f64, y: f64) {
        check("translate", self.ctx.translate(x, y));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        check("fillText", self.ctx.fill_text(text, x, y));
    }
}
