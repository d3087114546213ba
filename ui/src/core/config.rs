//! Dashboard configuration with reference defaults and optional JSON overrides.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::{DashboardError, Result};
use crate::core::format::NumberLocale;
use crate::metrics::{SynthesisProfile, WindowSelection};

/// Days synthesized per dataset (covers two of the shorter windows).
pub const DEFAULT_DATASET_DAYS: usize = 60;

/// Drawing surface dimensions in chart units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 320.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset_days: usize,
    pub initial_window: WindowSelection,
    pub canvas: CanvasSize,
    pub locale: NumberLocale,
    pub profile: SynthesisProfile,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_days: DEFAULT_DATASET_DAYS,
            initial_window: WindowSelection::default(),
            canvas: CanvasSize::default(),
            locale: NumberLocale::default(),
            profile: SynthesisProfile::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a (possibly partial) JSON override; missing keys keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| DashboardError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load an override file, e.g. the one named by `CREDORA_CONFIG`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| DashboardError::InvalidConfig(format!("{}: {err}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dataset_days == 0 {
            return Err(DashboardError::EmptyDataset);
        }

        let CanvasSize { width, height } = self.canvas;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(DashboardError::InvalidConfig(format!(
                "canvas must have a positive size, got {width}x{height}"
            )));
        }

        self.profile.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_dashboard() {
        let config = DashboardConfig::default();
        assert_eq!(config.dataset_days, 60);
        assert_eq!(config.initial_window, WindowSelection::Week);
        assert_eq!(config.locale, NumberLocale::EN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            DashboardConfig::from_json_str(r#"{ "initial_window": 30, "canvas": { "height": 400 } }"#)
                .unwrap();
        assert_eq!(config.initial_window, WindowSelection::Month);
        assert_eq!(config.canvas.height, 400.0);
        assert_eq!(config.canvas.width, 960.0);
        assert_eq!(config.dataset_days, 60);
    }

    #[test]
    fn locale_tag_resolves_separators() {
        let config = DashboardConfig::from_json_str(r#"{ "locale": "de" }"#).unwrap();
        assert_eq!(config.locale.decimal_separator(), ",");
        assert_eq!(config.locale.tag(), "de");

        let err = DashboardConfig::from_json_str(r#"{ "locale": "xx-nowhere" }"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn loads_overrides_from_file() {
        let path = std::env::temp_dir().join(format!("credora-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "initial_window": 90, "dataset_days": 120 }"#).unwrap();
        let config = DashboardConfig::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.initial_window, WindowSelection::Quarter);
        assert_eq!(config.dataset_days, 120);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = DashboardConfig::from_json_file("/nonexistent/credora.json").unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_window_is_rejected() {
        let err = DashboardConfig::from_json_str(r#"{ "initial_window": 14 }"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn zero_days_is_rejected() {
        let err = DashboardConfig::from_json_str(r#"{ "dataset_days": 0 }"#).unwrap_err();
        assert_eq!(err, DashboardError::EmptyDataset);
    }

    #[test]
    fn degenerate_canvas_is_rejected() {
        let mut config = DashboardConfig::default();
        config.canvas.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(DashboardError::InvalidConfig(_))
        ));
    }
}
