//! Frame scheduling - at most one frame in flight per renderer
//!
//! The renderer is moved out of the scheduler while a frame runs, so a
//! frame suspended in the face drawer can never overlap another. Input
//! that arrives meanwhile overwrites a single pending slot; config, drawer
//! and surface changes are staged and handed over before the next frame.

use std::cell::RefCell;
use std::rc::Rc;

use super::delegate::FaceDrawer;
use super::overlay::{DisplayMode, FrameInput, Liveness, OverlayRenderer};
use super::surface::Surface2d;
use crate::config::OverlayConfig;

pub struct FrameScheduler<S, D> {
    /// `None` while a frame is in flight
    renderer: Option<OverlayRenderer<S, D>>,
    pending: Option<FrameInput>,
    pending_config: Option<OverlayConfig>,
    pending_drawer: Option<D>,
    pending_surface: Option<S>,
    color_css: String,
    mode: DisplayMode,
    liveness: Liveness,
}

impl<S: Surface2d, D: FaceDrawer<S>> FrameScheduler<S, D> {
    pub fn new(renderer: OverlayRenderer<S, D>) -> Self {
        Self {
            color_css: renderer.current_color_css(),
            mode: renderer.mode(),
            liveness: renderer.liveness(),
            renderer: Some(renderer),
            pending: None,
            pending_config: None,
            pending_drawer: None,
            pending_surface: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.renderer.is_none()
    }

    /// The renderer, unless a frame is in flight
    pub fn renderer(&self) -> Option<&OverlayRenderer<S, D>> {
        self.renderer.as_ref()
    }

    pub fn attach_surface(&mut self, surface: S) {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.attach_surface(surface),
            None => self.pending_surface = Some(surface),
        }
    }

    pub fn attach_drawer(&mut self, drawer: D) {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.attach_drawer(drawer),
            None => self.pending_drawer = Some(drawer),
        }
    }

    pub fn set_config(&mut self, config: OverlayConfig) {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.set_config(config),
            None => self.pending_config = Some(config),
        }
    }

    /// Replace any undrawn input. Returns false once disposed.
    pub fn submit(&mut self, frame: FrameInput) -> bool {
        if !self.liveness.is_alive() {
            return false;
        }
        if self.pending.replace(frame).is_some() {
            log::trace!("overlay frame superseded before drawing");
        }
        true
    }

    /// Take the renderer to start a drive loop, if idle with input waiting
    pub fn begin(&mut self) -> Option<OverlayRenderer<S, D>> {
        if self.pending.is_none() {
            return None;
        }
        self.renderer.take()
    }

    /// Cancel the in-flight frame and drop undrawn input
    pub fn dispose(&mut self) {
        self.liveness.revoke();
        self.pending = None;
    }

    /// Smoothed mesh color as of the last finished frame
    pub fn current_color_css(&self) -> &str {
        &self.color_css
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Next input with staged changes applied, or park the renderer
    fn next_frame(
        &mut self,
        mut renderer: OverlayRenderer<S, D>,
    ) -> Option<(OverlayRenderer<S, D>, FrameInput)> {
        let Some(frame) = self.pending.take() else {
            self.renderer = Some(renderer);
            return None;
        };
        if let Some(config) = self.pending_config.take() {
            renderer.set_config(config);
        }
        if let Some(drawer) = self.pending_drawer.take() {
            renderer.attach_drawer(drawer);
        }
        if let Some(surface) = self.pending_surface.take() {
            renderer.attach_surface(surface);
        }
        Some((renderer, frame))
    }

    fn finish(&mut self, renderer: &OverlayRenderer<S, D>) {
        self.color_css = renderer.current_color_css();
        self.mode = renderer.mode();
    }
}

/// Draw pending frames one at a time, then park the renderer.
/// `renderer` comes from [`FrameScheduler::begin`].
pub async fn drive<S: Surface2d, D: FaceDrawer<S>>(
    scheduler: Rc<RefCell<FrameScheduler<S, D>>>,
    mut renderer: OverlayRenderer<S, D>,
) {
    loop {
        let next = scheduler.borrow_mut().next_frame(renderer);
        let Some((parked, input)) = next else {
            return;
        };
        renderer = parked;

        let outcome = renderer.render_frame(&input).await;
        log::trace!("overlay frame: {:?}", outcome);
        scheduler.borrow_mut().finish(&renderer);
    }
}
