//! Drawing surface abstraction - the subset of a 2D canvas the overlay uses
//!
//! Transforms compose the way a canvas context does: each `scale`/`translate`
//! multiplies onto the current matrix, `save`/`restore` push and pop it.
//! Changing the backing size discards content, the transform and the save
//! stack.

pub trait Surface2d {
    /// Backing store size in device pixels
    fn backing_size(&self) -> (u32, u32);
    fn set_backing_size(&mut self, width: u32, height: u32);
    /// Presented (CSS) size
    fn set_css_size(&mut self, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn scale(&mut self, x: f64, y: f64);
    fn translate(&mut self, x: f64, y: f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_stroke_style(&mut self, style: &str);
    fn set_fill_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Video element geometry read at the start of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoGeometry {
    /// Displayed (CSS) size
    pub display_width: f64,
    pub display_height: f64,
    /// Source resolution; 0 when the stream has not reported it yet
    pub native_width: f64,
    pub native_height: f64,
    pub device_pixel_ratio: f64,
}

impl VideoGeometry {
    /// Pixel density, 1 when unavailable
    pub fn density(&self) -> f64 {
        if self.device_pixel_ratio > 0.0 && self.device_pixel_ratio.is_finite() {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Backing store size for the displayed size at this density
    pub fn backing_size(&self) -> (u32, u32) {
        let density = self.density();
        (
            (self.display_width * density).round().max(0.0) as u32,
            (self.display_height * density).round().max(0.0) as u32,
        )
    }

    /// Scale from source-video pixels to displayed pixels.
    /// Missing native size falls back to the given defaults.
    pub fn source_to_display(&self, default_width: f64, default_height: f64) -> (f64, f64) {
        let native_w = if self.native_width > 0.0 { self.native_width } else { default_width };
        let native_h = if self.native_height > 0.0 { self.native_height } else { default_height };
        (self.display_width / native_w, self.display_height / native_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(dpr: f64, native: (f64, f64)) -> VideoGeometry {
        VideoGeometry {
            display_width: 800.0,
            display_height: 600.0,
            native_width: native.0,
            native_height: native.1,
            device_pixel_ratio: dpr,
        }
    }

    #[test]
    fn test_backing_size_scales_with_density() {
        assert_eq!(geometry(2.0, (640.0, 480.0)).backing_size(), (1600, 1200));
        assert_eq!(geometry(1.5, (640.0, 480.0)).backing_size(), (1200, 900));
    }

    #[test]
    fn test_bad_density_is_one() {
        assert_eq!(geometry(0.0, (0.0, 0.0)).density(), 1.0);
        assert_eq!(geometry(f64::NAN, (0.0, 0.0)).density(), 1.0);
    }

    #[test]
    fn test_missing_native_size_uses_default() {
        let (sx, sy) = geometry(1.0, (0.0, 0.0)).source_to_display(640.0, 480.0);
        assert_eq!((sx, sy), (1.25, 1.25));
        let (sx, sy) = geometry(1.0, (1600.0, 1200.0)).source_to_display(640.0, 480.0);
        assert_eq!((sx, sy), (0.5, 0.5));
    }
}
