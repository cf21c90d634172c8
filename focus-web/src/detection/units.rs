//! Unit conversions for the diagnostics text

use std::f64::consts::PI;

/// Round half toward positive infinity (browser `Math.round` semantics)
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Radians to whole degrees
pub fn to_degrees_rounded(rad: f64) -> i64 {
    round_half_up(rad * 180.0 / PI) as i64
}

/// Unit fraction (0..1) to whole percent
pub fn to_percent_rounded(fraction: f64) -> i64 {
    round_half_up(fraction * 100.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees() {
        assert_eq!(to_degrees_rounded(1.5708), 90);
        assert_eq!(to_degrees_rounded(-1.5708), -90);
        assert_eq!(to_degrees_rounded(0.0), 0);
        assert_eq!(to_degrees_rounded(PI), 180);
    }

    #[test]
    fn test_percent() {
        assert_eq!(to_percent_rounded(0.934), 93);
        assert_eq!(to_percent_rounded(0.005), 1);
        assert_eq!(to_percent_rounded(0.0), 0);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(2.5), 3.0);
    }
}
