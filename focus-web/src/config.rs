//! Overlay configuration
//!
//! Every field has a default. A partial JSON document overrides only the
//! fields it names.

use serde::Deserialize;

use crate::color::{PRIMARY_ALPHA, SECONDARY_ALPHA, SECONDARY_OFFSET, SMOOTHING_FACTOR};
use crate::error::ConfigError;

const DEFAULT_NATIVE_WIDTH: f64 = 640.0;
const DEFAULT_NATIVE_HEIGHT: f64 = 480.0;
const DEFAULT_FALLBACK_LINE_WIDTH: f64 = 2.0;
const DEFAULT_PANEL_LINE_HEIGHT: f64 = 18.0;
const DEFAULT_PANEL_PADDING: f64 = 8.0;
const DEFAULT_PANEL_WIDTH: f64 = 280.0;
const DEFAULT_PANEL_ORIGIN: f64 = 6.0;
const DEFAULT_PANEL_FONT: &str = "13px monospace";
const DEFAULT_PANEL_BACKGROUND: &str = "rgba(0, 0, 0, 0.6)";
const DEFAULT_PANEL_TEXT_COLOR: &str = "rgba(0, 255, 128, 0.9)";
const DEFAULT_DRAWER_LINE_WIDTH: f64 = 2.0;
const DEFAULT_DRAWER_FONT: &str = "small-caps 13px \"Segoe UI\"";

// ============================================================================
// FILE SHAPE (all optional)
// ============================================================================

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OverlayConfigFile {
    smoothing_factor: Option<f64>,
    secondary_offset: Option<u8>,
    primary_alpha: Option<f64>,
    secondary_alpha: Option<f64>,
    fallback: Option<FallbackConfigFile>,
    panel: Option<PanelConfigFile>,
    drawer: Option<DrawerConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FallbackConfigFile {
    native_width: Option<f64>,
    native_height: Option<f64>,
    line_width: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PanelConfigFile {
    line_height: Option<f64>,
    padding: Option<f64>,
    width: Option<f64>,
    origin: Option<f64>,
    font: Option<String>,
    background: Option<String>,
    text_color: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DrawerConfigFile {
    line_width: Option<f64>,
    font: Option<String>,
}

// ============================================================================
// RESOLVED CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Fraction of remaining color distance covered per frame
    pub smoothing_factor: f64,
    /// Added to each channel of the smoothed color for the label shade
    pub secondary_offset: u8,
    pub primary_alpha: f64,
    pub secondary_alpha: f64,
    pub fallback: FallbackSettings,
    pub panel: PanelSettings,
    pub drawer: DrawerSettings,
}

/// Manual bounding-box stroke used when the drawer fails
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackSettings {
    /// Assumed source size when the video reports none
    pub native_width: f64,
    pub native_height: f64,
    pub line_width: f64,
}

/// Diagnostics text panel layout
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSettings {
    pub line_height: f64,
    pub padding: f64,
    pub width: f64,
    /// Top-left corner, both axes
    pub origin: f64,
    pub font: String,
    pub background: String,
    pub text_color: String,
}

/// Fixed style passed to the external drawer
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerSettings {
    pub line_width: f64,
    pub font: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: SMOOTHING_FACTOR,
            secondary_offset: SECONDARY_OFFSET,
            primary_alpha: PRIMARY_ALPHA,
            secondary_alpha: SECONDARY_ALPHA,
            fallback: FallbackSettings {
                native_width: DEFAULT_NATIVE_WIDTH,
                native_height: DEFAULT_NATIVE_HEIGHT,
                line_width: DEFAULT_FALLBACK_LINE_WIDTH,
            },
            panel: PanelSettings {
                line_height: DEFAULT_PANEL_LINE_HEIGHT,
                padding: DEFAULT_PANEL_PADDING,
                width: DEFAULT_PANEL_WIDTH,
                origin: DEFAULT_PANEL_ORIGIN,
                font: DEFAULT_PANEL_FONT.to_string(),
                background: DEFAULT_PANEL_BACKGROUND.to_string(),
                text_color: DEFAULT_PANEL_TEXT_COLOR.to_string(),
            },
            drawer: DrawerSettings {
                line_width: DEFAULT_DRAWER_LINE_WIDTH,
                font: DEFAULT_DRAWER_FONT.to_string(),
            },
        }
    }
}

impl OverlayConfig {
    /// Parse a partial JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: OverlayConfigFile = serde_json::from_str(json)?;
        let defaults = Self::default();

        let fallback = file.fallback.unwrap_or_default();
        let panel = file.panel.unwrap_or_default();
        let drawer = file.drawer.unwrap_or_default();

        let config = Self {
            smoothing_factor: file.smoothing_factor.unwrap_or(defaults.smoothing_factor),
            secondary_offset: file.secondary_offset.unwrap_or(defaults.secondary_offset),
            primary_alpha: file.primary_alpha.unwrap_or(defaults.primary_alpha),
            secondary_alpha: file.secondary_alpha.unwrap_or(defaults.secondary_alpha),
            fallback: FallbackSettings {
                native_width: fallback.native_width.unwrap_or(defaults.fallback.native_width),
                native_height: fallback.native_height.unwrap_or(defaults.fallback.native_height),
                line_width: fallback.line_width.unwrap_or(defaults.fallback.line_width),
            },
            panel: PanelSettings {
                line_height: panel.line_height.unwrap_or(defaults.panel.line_height),
                padding: panel.padding.unwrap_or(defaults.panel.padding),
                width: panel.width.unwrap_or(defaults.panel.width),
                origin: panel.origin.unwrap_or(defaults.panel.origin),
                font: panel.font.unwrap_or(defaults.panel.font),
                background: panel.background.unwrap_or(defaults.panel.background),
                text_color: panel.text_color.unwrap_or(defaults.panel.text_color),
            },
            drawer: DrawerSettings {
                line_width: drawer.line_width.unwrap_or(defaults.drawer.line_width),
                font: drawer.font.unwrap_or(defaults.drawer.font),
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor < 1.0) {
            return Err(ConfigError::SmoothingFactor(self.smoothing_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OverlayConfig::default();
        assert_eq!(config.smoothing_factor, 0.4);
        assert_eq!(config.secondary_offset, 40);
        assert_eq!(config.fallback.native_width, 640.0);
        assert_eq!(config.fallback.native_height, 480.0);
        assert_eq!(config.panel.line_height, 18.0);
        assert_eq!(config.panel.padding, 8.0);
        assert_eq!(config.panel.width, 280.0);
    }

    #[test]
    fn test_partial_override() {
        let config = OverlayConfig::from_json(r#"{"smoothing_factor": 0.25, "panel": {"width": 320}}"#).unwrap();
        assert_eq!(config.smoothing_factor, 0.25);
        assert_eq!(config.panel.width, 320.0);
        assert_eq!(config.panel.line_height, 18.0);
        assert_eq!(config.drawer, OverlayConfig::default().drawer);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(OverlayConfig::from_json("{}").unwrap(), OverlayConfig::default());
    }

    #[test]
    fn test_rejects_bad_factor() {
        assert!(matches!(
            OverlayConfig::from_json(r#"{"smoothing_factor": 0}"#),
            Err(ConfigError::SmoothingFactor(_))
        ));
        assert!(matches!(
            OverlayConfig::from_json(r#"{"smoothing_factor": 1.5}"#),
            Err(ConfigError::SmoothingFactor(_))
        ));
    }

    #[test]
    fn test_rejects_factor_that_would_snap() {
        // A full step jumps straight to the target color
        assert!(matches!(
            OverlayConfig::from_json(r#"{"smoothing_factor": 1.0}"#),
            Err(ConfigError::SmoothingFactor(f)) if f == 1.0
        ));
        let config = OverlayConfig::from_json(r#"{"smoothing_factor": 0.99}"#).unwrap();
        let mut color = crate::color::SmoothedColor::new(config.smoothing_factor);
        let red = crate::color::Rgb::new(239, 68, 68);
        assert_ne!(color.advance(red), red);
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(matches!(
            OverlayConfig::from_json(r#"{"smoothing": 0.3}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
