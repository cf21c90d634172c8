//! Status badge for the host UI: color swatch plus score or "CAL"

use serde::Serialize;

use crate::color::score_tones;
use crate::detection::round_half_up;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    /// Opaque swatch color
    pub color: String,
    pub label: String,
}

/// Badge for the averaged focus score
pub fn status_badge(focus_score: f64, calibrated: bool) -> StatusBadge {
    let (primary, _) = score_tones(focus_score, calibrated);
    let label = if calibrated {
        format!("{}", round_half_up(focus_score) as i64)
    } else {
        "CAL".to_string()
    };
    StatusBadge {
        color: primary.css(1.0),
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibrating_badge() {
        let badge = status_badge(73.0, false);
        assert_eq!(badge.label, "CAL");
        assert_eq!(badge.color, "rgba(100, 80, 220, 1)");
    }

    #[test]
    fn test_measuring_badge() {
        let badge = status_badge(84.6, true);
        assert_eq!(badge.label, "85");
        assert_eq!(badge.color, "rgba(34, 197, 94, 1)");
    }
}
