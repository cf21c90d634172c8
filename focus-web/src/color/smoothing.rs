//! Cross-frame color smoothing
//!
//! Exponential smoothing toward the target color: each advance covers a
//! fixed fraction of the remaining distance. Never snaps to the target, so a
//! large score jump still fades over a few frames.

use super::gradient::{Rgb, CALIBRATION_COLOR};
use crate::detection::round_half_up;

/// Fraction of the remaining distance covered per frame
pub const SMOOTHING_FACTOR: f64 = 0.4;

/// Per-channel offset for the secondary (label) shade
pub const SECONDARY_OFFSET: u8 = 40;

/// Smoothed mesh color owned by one renderer
#[derive(Debug, Clone)]
pub struct SmoothedColor {
    /// Unrounded channel values
    channels: [f64; 3],
    /// Step size in (0, 1)
    factor: f64,
}

impl SmoothedColor {
    /// Start at the calibration color
    pub fn new(factor: f64) -> Self {
        Self::starting_at(CALIBRATION_COLOR, factor)
    }

    pub fn starting_at(color: Rgb, factor: f64) -> Self {
        Self {
            channels: [color.r as f64, color.g as f64, color.b as f64],
            factor,
        }
    }

    pub fn set_factor(&mut self, factor: f64) {
        self.factor = factor;
    }

    /// Move toward `target` by the smoothing factor.
    /// Returns the new rounded primary color.
    pub fn advance(&mut self, target: Rgb) -> Rgb {
        for (current, goal) in self.channels.iter_mut().zip(target.channels()) {
            *current += (goal as f64 - *current) * self.factor;
        }
        self.primary()
    }

    /// Rounded primary color
    pub fn primary(&self) -> Rgb {
        let [r, g, b] = self.channels.map(|c| round_half_up(c) as u8);
        Rgb { r, g, b }
    }

    /// Primary lightened by `offset`, capped at 255
    pub fn secondary(&self, offset: u8) -> Rgb {
        self.primary().lighten(offset)
    }

    /// Unrounded channel values
    pub fn channels(&self) -> [f64; 3] {
        self.channels
    }
}

impl Default for SmoothedColor {
    fn default() -> Self {
        Self::new(SMOOTHING_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::map_score_to_color;

    #[test]
    fn test_starts_at_calibration_color() {
        let color = SmoothedColor::default();
        assert_eq!(color.primary(), Rgb::new(100, 80, 220));
    }

    #[test]
    fn test_single_step_is_forty_percent() {
        let mut color = SmoothedColor::starting_at(Rgb::new(0, 0, 0), SMOOTHING_FACTOR);
        let out = color.advance(Rgb::new(100, 200, 50));
        assert_eq!(out, Rgb::new(40, 80, 20));
        let [r, g, b] = color.channels();
        assert!((r - 40.0).abs() < 1e-9);
        assert!((g - 80.0).abs() < 1e-9);
        assert!((b - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_converges_within_ten_frames_without_overshoot() {
        for target in [
            map_score_to_color(0.0, true),
            map_score_to_color(57.0, true),
            map_score_to_color(100.0, true),
        ] {
            let mut color = SmoothedColor::default();
            for _ in 0..10 {
                let before = color.channels();
                color.advance(target);
                let after = color.channels();
                for i in 0..3 {
                    let goal = target.channels()[i] as f64;
                    let (lo, hi) = if before[i] <= goal { (before[i], goal) } else { (goal, before[i]) };
                    assert!(after[i] >= lo && after[i] <= hi);
                }
            }
            let out = color.primary();
            for (a, b) in out.channels().iter().zip(target.channels().iter()) {
                assert!((*a as i16 - *b as i16).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_never_snaps_on_large_jump() {
        let mut color = SmoothedColor::starting_at(Rgb::new(239, 68, 68), SMOOTHING_FACTOR);
        let target = Rgb::new(34, 197, 94);
        let out = color.advance(target);
        assert_ne!(out, target);
        assert_eq!(out, Rgb::new(157, 120, 78));
    }

    #[test]
    fn test_secondary_is_capped() {
        let color = SmoothedColor::starting_at(Rgb::new(239, 68, 68), SMOOTHING_FACTOR);
        assert_eq!(color.secondary(SECONDARY_OFFSET), Rgb::new(255, 108, 108));
    }
}
