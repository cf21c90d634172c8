//! Face drawer backed by the detector library's `human.draw` object
//!
//! Options are copied onto `draw.options` right before each call, then
//! `draw.all(canvas, payload)` is awaited. Anything it throws or rejects
//! with becomes a `DrawError`, which the renderer turns into the fallback box.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::canvas::CanvasSurface;
use super::errors::{js_draw_error, to_js};
use crate::detection::DrawPayload;
use crate::error::DrawError;
use crate::renderer::{DrawOptions, FaceDrawer};

pub struct HumanDrawer {
    /// The `human.draw` namespace object
    draw: JsValue,
    options: DrawOptions,
}

impl HumanDrawer {
    /// `None` for `null`/`undefined` (detector not loaded yet)
    pub fn new(draw: JsValue) -> Option<Self> {
        if draw.is_null() || draw.is_undefined() {
            return None;
        }
        Some(Self {
            draw,
            options: DrawOptions::default(),
        })
    }

    fn push_options(&self) -> Result<(), DrawError> {
        let target = Reflect::get(&self.draw, &JsValue::from_str("options")).map_err(js_draw_error)?;
        let target = target.dyn_into::<Object>().map_err(|_| DrawError::NotReady)?;
        let options = to_js(&self.options).map_err(|e| DrawError::Payload(e.to_string()))?;
        Object::assign(&target, options.unchecked_ref::<Object>());
        Ok(())
    }

    fn all_fn(&self) -> Result<Function, DrawError> {
        Reflect::get(&self.draw, &JsValue::from_str("all"))
            .map_err(js_draw_error)?
            .dyn_into::<Function>()
            .map_err(|_| DrawError::NotReady)
    }
}

impl FaceDrawer<CanvasSurface> for HumanDrawer {
    fn options_mut(&mut self) -> &mut DrawOptions {
        &mut self.options
    }

    async fn draw_all(
        &mut self,
        surface: &mut CanvasSurface,
        payload: &DrawPayload,
    ) -> Result<(), DrawError> {
        self.push_options()?;
        let payload = to_js(payload).map_err(|e| DrawError::Payload(e.to_string()))?;
        let all = self.all_fn()?;

        let canvas: &JsValue = surface.canvas().as_ref();
        let returned = all.call2(&self.draw, canvas, &payload).map_err(js_draw_error)?;
        JsFuture::from(Promise::resolve(&returned))
            .await
            .map_err(js_draw_error)?;
        Ok(())
    }
}
