//! Overlay renderer - one per video element
//!
//! Per result update, in order:
//! 1. sync canvas geometry to the displayed video size × density
//! 2. clear
//! 3. mirror (the video is shown flipped)
//! 4. advance the smoothed color toward the instant-score target
//! 5. configure and call the external face drawer, stroking the face box
//!    by hand if it fails
//! 6. undo the mirror
//! 7. diagnostics panel while calibrating
//!
//! A liveness check precedes every drawing step so a frame suspended in
//! the drawer never touches a torn-down surface.

use std::cell::Cell;
use std::rc::Rc;

use super::delegate::FaceDrawer;
use super::geometry::GeometryCache;
use super::panel::DiagnosticsPanel;
use super::surface::{Surface2d, VideoGeometry};
use crate::color::{map_score_to_color, Rgb, SmoothedColor};
use crate::config::{FallbackSettings, OverlayConfig};
use crate::detection::{DetectionResult, DrawPayload, Scores};

// ============================================================================
// FRAME TYPES
// ============================================================================

/// Selected by the calibration flag each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Calibration,
    Measuring,
}

impl DisplayMode {
    pub fn from_calibrated(calibrated: bool) -> Self {
        if calibrated {
            DisplayMode::Measuring
        } else {
            DisplayMode::Calibration
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Calibration => "calibration",
            DisplayMode::Measuring => "measuring",
        }
    }
}

/// Everything one frame needs
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub video: Option<VideoGeometry>,
    pub result: Option<DetectionResult>,
    pub scores: Scores,
    pub fps: f64,
    pub calibrated: bool,
}

/// Which collaborator was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReady {
    Video,
    Surface,
    Drawer,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing drawn, nothing advanced
    Skipped(NotReady),
    /// Torn down mid-frame
    Cancelled,
    Drawn { fallback: bool },
}

/// Shared flag cleared when the hosting view goes away
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// RENDERER
// ============================================================================

pub struct OverlayRenderer<S, D> {
    surface: Option<S>,
    drawer: Option<D>,
    color: SmoothedColor,
    geometry: GeometryCache,
    config: OverlayConfig,
    mode: DisplayMode,
    liveness: Liveness,
}

impl<S: Surface2d, D: FaceDrawer<S>> OverlayRenderer<S, D> {
    /// Renderer with nothing attached yet
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            surface: None,
            drawer: None,
            color: SmoothedColor::new(config.smoothing_factor),
            geometry: GeometryCache::new(),
            config,
            mode: DisplayMode::default(),
            liveness: Liveness::new(),
        }
    }

    pub fn with_parts(surface: S, drawer: D, config: OverlayConfig) -> Self {
        let mut renderer = Self::new(config);
        renderer.attach_surface(surface);
        renderer.attach_drawer(drawer);
        renderer
    }

    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
        self.geometry.invalidate();
    }

    pub fn attach_drawer(&mut self, drawer: D) {
        self.drawer = Some(drawer);
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn drawer(&self) -> Option<&D> {
        self.drawer.as_ref()
    }

    pub fn drawer_mut(&mut self) -> Option<&mut D> {
        self.drawer.as_mut()
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the config. The smoothed color carries over.
    pub fn set_config(&mut self, config: OverlayConfig) {
        self.color.set_factor(config.smoothing_factor);
        self.config = config;
    }

    /// Smoothed primary color as of the last drawn frame
    pub fn current_color(&self) -> Rgb {
        self.color.primary()
    }

    pub fn current_color_css(&self) -> String {
        self.color.primary().css(self.config.primary_alpha)
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Handle for cancelling in-flight frames on teardown
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Draw one frame. Not-ready and drawer failures are outcomes, not errors.
    pub async fn render_frame(&mut self, input: &FrameInput) -> FrameOutcome {
        let Some(video) = input.video else {
            return skipped(NotReady::Video);
        };
        let Some(result) = input.result.as_ref() else {
            return skipped(NotReady::Result);
        };
        let Some(surface) = self.surface.as_mut() else {
            return skipped(NotReady::Surface);
        };
        let Some(drawer) = self.drawer.as_mut() else {
            return skipped(NotReady::Drawer);
        };
        let alive = &self.liveness;
        let config = &self.config;

        // 1. Geometry
        if !alive.is_alive() {
            return FrameOutcome::Cancelled;
        }
        self.geometry.sync(surface, &video);

        // 2. Clear
        if !alive.is_alive() {
            return FrameOutcome::Cancelled;
        }
        let (backing_w, backing_h) = surface.backing_size();
        surface.clear_rect(0.0, 0.0, backing_w as f64, backing_h as f64);

        // 3. Mirror
        if !alive.is_alive() {
            return FrameOutcome::Cancelled;
        }
        surface.save();
        surface.translate(video.display_width, 0.0);
        surface.scale(-1.0, 1.0);

        // 4. Color
        self.mode = DisplayMode::from_calibrated(input.calibrated);
        let target = map_score_to_color(input.scores.instant, input.calibrated);
        let primary = self.color.advance(target).css(config.primary_alpha);
        let secondary = self
            .color
            .secondary(config.secondary_offset)
            .css(config.secondary_alpha);
        log::trace!(
            "frame: instant={} alignment={} focus={} -> {}",
            input.scores.instant,
            input.scores.alignment,
            input.scores.focus,
            primary
        );

        // 5. Delegate
        if !alive.is_alive() {
            return FrameOutcome::Cancelled;
        }
        drawer
            .options_mut()
            .configure(&primary, &secondary, input.calibrated, &config.drawer);
        let payload = DrawPayload::from_result(result, video.display_width, video.display_height);
        let delegated = drawer.draw_all(surface, &payload).await;

        if !alive.is_alive() {
            return FrameOutcome::Cancelled;
        }
        let fallback = match delegated {
            Ok(()) => false,
            Err(err) => {
                log::warn!("face drawer failed, stroking box instead: {}", err);
                stroke_face_box(surface, result, &video, &primary, &config.fallback);
                true
            }
        };

        // 6. Unmirror
        surface.restore();

        // 7. Diagnostics
        if !input.calibrated && alive.is_alive() {
            if let Some(panel) = DiagnosticsPanel::build(result, input.fps) {
                panel.draw(surface, &config.panel);
            }
        }

        FrameOutcome::Drawn { fallback }
    }
}

fn skipped(reason: NotReady) -> FrameOutcome {
    log::trace!("overlay frame skipped: {:?} not ready", reason);
    FrameOutcome::Skipped(reason)
}

/// Stroke the primary face box, scaled from source pixels to display pixels
fn stroke_face_box<S: Surface2d>(
    surface: &mut S,
    result: &DetectionResult,
    video: &VideoGeometry,
    style: &str,
    settings: &FallbackSettings,
) {
    let Some(face) = result.primary_face() else {
        return;
    };
    let (sx, sy) = video.source_to_display(settings.native_width, settings.native_height);
    let rect = face.bbox.scaled(sx, sy);

    surface.set_stroke_style(style);
    surface.set_line_width(settings.line_width);
    surface.stroke_rect(rect.x, rect.y, rect.width, rect.height);
}
