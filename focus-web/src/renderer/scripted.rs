//! Test drawer shared by renderer and scheduler tests

use futures_lite::future::yield_now;

use super::delegate::{DrawOptions, FaceDrawer};
use super::overlay::Liveness;
use super::recording::RecordingSurface;
use super::surface::Surface2d;
use super::transform::Transform2d;
use crate::detection::DrawPayload;
use crate::error::DrawError;

/// Drawer that records each call, suspends once, then succeeds or fails
#[derive(Default)]
pub(crate) struct ScriptedDrawer {
    pub options: DrawOptions,
    pub fail: bool,
    pub revoke_on_draw: Option<Liveness>,
    pub calls: Vec<(DrawOptions, DrawPayload, Transform2d)>,
}

impl FaceDrawer<RecordingSurface> for ScriptedDrawer {
    fn options_mut(&mut self) -> &mut DrawOptions {
        &mut self.options
    }

    async fn draw_all(
        &mut self,
        surface: &mut RecordingSurface,
        payload: &DrawPayload,
    ) -> Result<(), DrawError> {
        self.calls
            .push((self.options.clone(), payload.clone(), surface.transform()));
        yield_now().await;
        if let Some(liveness) = &self.revoke_on_draw {
            liveness.revoke();
        }
        if self.fail {
            return Err(DrawError::Js("TypeError: face.mesh is undefined".into()));
        }
        surface.set_stroke_style(&self.options.color);
        surface.stroke_rect(100.0, 50.0, 20.0, 10.0);
        Ok(())
    }
}
