//! Score-to-color gradient
//!
//! Focused = green, distracted = red:
//!   0-30:   red (head turned away)
//!   30-50:  red -> orange
//!   50-65:  orange -> yellow
//!   65-80:  yellow -> green
//!   80+:    green (looking at screen)
//!
//! Calibration uses a blue-purple outside the gradient.
//! Scores are not clamped: anything below 30 is red, anything from 80 up is green.

use serde::Serialize;

use crate::detection::round_half_up;

/// Alpha of the primary (mesh) color in CSS form
pub const PRIMARY_ALPHA: f64 = 0.8;

/// Alpha of the secondary (label) color in CSS form
pub const SECONDARY_ALPHA: f64 = 0.9;

// ============================================================================
// COLOR TYPES
// ============================================================================

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a CSS `rgba()` string
    pub fn css(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Add `offset` to every channel, capped at 255
    pub fn lighten(self, offset: u8) -> Self {
        Self {
            r: self.r.saturating_add(offset),
            g: self.g.saturating_add(offset),
            b: self.b.saturating_add(offset),
        }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Primary/secondary CSS color pair for non-canvas consumers (status badges)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssColors {
    pub primary: String,
    pub secondary: String,
}

/// A gradient stop: the mesh color and its lighter label shade
#[derive(Clone, Copy)]
struct Tone {
    base: Rgb,
    light: Rgb,
}

// ============================================================================
// GRADIENT STOPS
// ============================================================================

const CALIBRATION: Tone = Tone {
    base: Rgb::new(100, 80, 220),
    light: Rgb::new(140, 120, 255),
};

const RED: Tone = Tone {
    base: Rgb::new(239, 68, 68),
    light: Rgb::new(252, 165, 165),
};

const ORANGE: Tone = Tone {
    base: Rgb::new(249, 115, 22),
    light: Rgb::new(253, 186, 116),
};

const YELLOW: Tone = Tone {
    base: Rgb::new(234, 179, 8),
    light: Rgb::new(253, 224, 71),
};

const GREEN: Tone = Tone {
    base: Rgb::new(34, 197, 94),
    light: Rgb::new(134, 239, 172),
};

/// Color shown while calibrating, and the initial smoothed color
pub const CALIBRATION_COLOR: Rgb = CALIBRATION.base;

/// Score below which the color is solid red
const RED_CEILING: f64 = 30.0;

/// Interpolated bands: (start, span, from, to). Contiguous from 30 to 80.
const BANDS: [(f64, f64, Tone, Tone); 3] = [
    (30.0, 20.0, RED, ORANGE),
    (50.0, 15.0, ORANGE, YELLOW),
    (65.0, 15.0, YELLOW, GREEN),
];

// ============================================================================
// MAPPING
// ============================================================================

/// Linearly interpolate between two colors, rounding each channel
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let lerp = |from: u8, to: u8| round_half_up(from as f64 + (to as f64 - from as f64) * t) as u8;
    Rgb {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
    }
}

/// Primary and light shade for a score. Both mapping functions go through
/// here so breakpoints and `t` are shared.
pub fn score_tones(score: f64, is_calibrated: bool) -> (Rgb, Rgb) {
    if !is_calibrated {
        return (CALIBRATION.base, CALIBRATION.light);
    }

    if score < RED_CEILING {
        return (RED.base, RED.light);
    }

    for (start, span, from, to) in BANDS {
        if score < start + span {
            let t = (score - start) / span;
            return (
                lerp_rgb(from.base, to.base, t),
                lerp_rgb(from.light, to.light, t),
            );
        }
    }

    (GREEN.base, GREEN.light)
}

/// Target mesh color for a score and calibration state
pub fn map_score_to_color(score: f64, is_calibrated: bool) -> Rgb {
    score_tones(score, is_calibrated).0
}

/// CSS color pair for a score and calibration state
pub fn map_score_to_css_colors(score: f64, is_calibrated: bool) -> CssColors {
    let (primary, secondary) = score_tones(score, is_calibrated);
    CssColors {
        primary: primary.css(PRIMARY_ALPHA),
        secondary: secondary.css(SECONDARY_ALPHA),
    }
}
