//! Canvas geometry sync - backing store follows displayed size × density

use super::surface::{Surface2d, VideoGeometry};

/// Last geometry applied to the surface
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometryCache {
    applied: Option<AppliedGeometry>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AppliedGeometry {
    display: (f64, f64),
    density: f64,
    backing: (u32, u32),
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backing size last applied, if any
    pub fn backing_size(&self) -> Option<(u32, u32)> {
        self.applied.map(|a| a.backing)
    }

    /// Forget the applied geometry so the next sync resizes
    pub fn invalidate(&mut self) {
        self.applied = None;
    }

    /// Resize the surface if the backing size or density changed.
    ///
    /// A resize wipes the canvas transform, so the density scale is always
    /// re-applied right after. Returns whether a resize happened.
    pub fn sync<S: Surface2d>(&mut self, surface: &mut S, video: &VideoGeometry) -> bool {
        let wanted = AppliedGeometry {
            display: (video.display_width, video.display_height),
            density: video.density(),
            backing: video.backing_size(),
        };

        if self.applied == Some(wanted) && surface.backing_size() == wanted.backing {
            return false;
        }

        surface.set_backing_size(wanted.backing.0, wanted.backing.1);
        surface.set_css_size(wanted.display.0, wanted.display.1);
        surface.scale(wanted.density, wanted.density);
        self.applied = Some(wanted);

        log::debug!(
            "overlay resized to {}x{} (display {}x{} @ {}x)",
            wanted.backing.0,
            wanted.backing.1,
            wanted.display.0,
            wanted.display.1,
            wanted.density
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::RecordingSurface;

    fn video(width: f64, height: f64, dpr: f64) -> VideoGeometry {
        VideoGeometry {
            display_width: width,
            display_height: height,
            native_width: 640.0,
            native_height: 480.0,
            device_pixel_ratio: dpr,
        }
    }

    #[test]
    fn test_first_sync_resizes_and_scales() {
        let mut surface = RecordingSurface::new();
        let mut cache = GeometryCache::new();
        assert!(cache.sync(&mut surface, &video(800.0, 600.0, 2.0)));
        assert_eq!(surface.backing_size(), (1600, 1200));
        assert_eq!(surface.css_size(), (800.0, 600.0));
        assert_eq!(surface.transform().apply(10.0, 10.0), (20.0, 20.0));
        assert_eq!(cache.backing_size(), Some((1600, 1200)));
    }

    #[test]
    fn test_unchanged_geometry_skips_resize() {
        let mut surface = RecordingSurface::new();
        let mut cache = GeometryCache::new();
        cache.sync(&mut surface, &video(800.0, 600.0, 1.0));
        assert!(!cache.sync(&mut surface, &video(800.0, 600.0, 1.0)));
        assert_eq!(surface.resize_count(), 1);
    }

    #[test]
    fn test_density_change_with_same_backing_resizes() {
        let mut surface = RecordingSurface::new();
        let mut cache = GeometryCache::new();
        cache.sync(&mut surface, &video(800.0, 600.0, 1.0));
        assert!(cache.sync(&mut surface, &video(400.0, 300.0, 2.0)));
        assert_eq!(surface.backing_size(), (800, 600));
        assert_eq!(surface.transform().apply(1.0, 1.0), (2.0, 2.0));
    }

    #[test]
    fn test_external_resize_is_repaired() {
        let mut surface = RecordingSurface::new();
        let mut cache = GeometryCache::new();
        cache.sync(&mut surface, &video(800.0, 600.0, 1.0));
        surface.set_backing_size(300, 150);
        assert!(cache.sync(&mut surface, &video(800.0, 600.0, 1.0)));
        assert_eq!(surface.backing_size(), (800, 600));
    }
}
