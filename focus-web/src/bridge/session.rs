//! Overlay session - one per video element, driven by detection results
//!
//! JS calls `submit` whenever a new detection result arrives. The video
//! geometry is read at submit time and the frame handed to the scheduler,
//! which keeps frames from overlapping. `dispose` stops all further drawing.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlCanvasElement, HtmlVideoElement};

use super::canvas::CanvasSurface;
use super::errors::BridgeError;
use super::human::HumanDrawer;
use crate::config::OverlayConfig;
use crate::detection::{DetectionResult, Scores};
use crate::renderer::{drive, FrameInput, FrameScheduler, OverlayRenderer, VideoGeometry};

type WebRenderer = OverlayRenderer<CanvasSurface, HumanDrawer>;
type WebScheduler = FrameScheduler<CanvasSurface, HumanDrawer>;

#[wasm_bindgen]
pub struct FocusOverlay {
    video: RefCell<Option<HtmlVideoElement>>,
    frames: Rc<RefCell<WebScheduler>>,
}

#[wasm_bindgen]
impl FocusOverlay {
    /// Any of the three may be missing; frames are skipped until attached.
    #[wasm_bindgen(constructor)]
    pub fn new(
        video: Option<HtmlVideoElement>,
        canvas: Option<HtmlCanvasElement>,
        human_draw: JsValue,
    ) -> Result<FocusOverlay, JsValue> {
        let mut renderer = WebRenderer::new(OverlayConfig::default());
        if let Some(canvas) = canvas {
            renderer.attach_surface(CanvasSurface::new(canvas)?);
        }
        if let Some(drawer) = HumanDrawer::new(human_draw) {
            renderer.attach_drawer(drawer);
        }
        Ok(FocusOverlay {
            video: RefCell::new(video),
            frames: Rc::new(RefCell::new(FrameScheduler::new(renderer))),
        })
    }

    pub fn attach_video(&self, video: HtmlVideoElement) {
        *self.video.borrow_mut() = Some(video);
    }

    pub fn attach_canvas(&self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        self.frames.borrow_mut().attach_surface(surface);
        Ok(())
    }

    /// Attach the detector's `human.draw` object once it has loaded
    pub fn attach_drawer(&self, human_draw: JsValue) {
        if let Some(drawer) = HumanDrawer::new(human_draw) {
            self.frames.borrow_mut().attach_drawer(drawer);
        }
    }

    /// Override defaults from a partial JSON document
    pub fn set_config(&self, json: &str) -> Result<(), JsValue> {
        let config = OverlayConfig::from_json(json).map_err(BridgeError::from)?;
        self.frames.borrow_mut().set_config(config);
        Ok(())
    }

    /// Draw for a new detection result. `result` may be null.
    pub fn submit(
        &self,
        result: JsValue,
        focus_score: f64,
        alignment_score: f64,
        instant_score: f64,
        fps: f64,
        calibrated: bool,
    ) -> Result<(), JsValue> {
        let frame = FrameInput {
            video: self.video.borrow().as_ref().and_then(read_geometry),
            result: parse_result(&result)?,
            scores: Scores {
                focus: focus_score,
                alignment: alignment_score,
                instant: instant_score,
            },
            fps,
            calibrated,
        };
        let renderer = {
            let mut frames = self.frames.borrow_mut();
            if !frames.submit(frame) {
                return Ok(());
            }
            frames.begin()
        };
        if let Some(renderer) = renderer {
            spawn_local(drive(Rc::clone(&self.frames), renderer));
        }
        Ok(())
    }

    /// Stop drawing. A suspended frame finishes without touching the canvas.
    pub fn dispose(&self) {
        self.frames.borrow_mut().dispose();
        *self.video.borrow_mut() = None;
    }

    /// Smoothed mesh color as of the last frame
    #[wasm_bindgen(getter)]
    pub fn current_color(&self) -> String {
        self.frames.borrow().current_color_css().to_string()
    }

    /// "calibration" or "measuring"
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.frames.borrow().mode().as_str().to_string()
    }
}

fn read_geometry(video: &HtmlVideoElement) -> Option<VideoGeometry> {
    let window = web_sys::window()?;
    Some(VideoGeometry {
        display_width: video.client_width() as f64,
        display_height: video.client_height() as f64,
        native_width: video.video_width() as f64,
        native_height: video.video_height() as f64,
        device_pixel_ratio: window.device_pixel_ratio(),
    })
}

fn parse_result(value: &JsValue) -> Result<Option<DetectionResult>, BridgeError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(value)
        .map_err(|_| BridgeError::BadResult("not serializable".to_string()))?;
    serde_json::from_str(&String::from(json))
        .map(Some)
        .map_err(|e| BridgeError::BadResult(e.to_string()))
}
