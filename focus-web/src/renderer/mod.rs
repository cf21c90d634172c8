//! Renderer module - focus overlay drawn over the mirrored webcam video
//! 
//! Re-exports only. All logic in submodules.

mod badge;
mod delegate;
mod geometry;
mod overlay;
mod panel;
mod recording;
mod scheduler;
#[cfg(test)]
mod scripted;
mod surface;
mod transform;

pub use badge::{status_badge, StatusBadge};
pub use delegate::{DrawOptions, FaceDrawer};
pub use geometry::GeometryCache;
pub use overlay::{DisplayMode, FrameInput, FrameOutcome, Liveness, NotReady, OverlayRenderer};
pub use panel::DiagnosticsPanel;
pub use recording::{DrawCommand, Rect, RecordingSurface};
pub use scheduler::{drive, FrameScheduler};
pub use surface::{Surface2d, VideoGeometry};
pub use transform::Transform2d;
