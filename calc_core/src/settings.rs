//! # Widget Settings
//!
//! Read-only user preferences shared by the front-ends, stored as a small
//! JSON file. Settings never hold calculator or converter state; they only
//! choose how a fresh session starts. Every field is optional.
//!
//! ```json
//! {
//!   "default_category": "distance",
//!   "auto_convert": true,
//!   "toast_duration_ms": 2000
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::converter::Converter;
use crate::errors::{CalcError, CalcResult};
use crate::units;

/// Environment variable the GUI reads the settings path from
pub const SETTINGS_ENV_VAR: &str = "CALC_SETTINGS";

/// Front-end preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Category the converter opens with
    pub default_category: String,

    /// Whether typing in the converter input converts immediately
    pub auto_convert: bool,

    /// How long notifications stay visible
    pub toast_duration_ms: u64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        WidgetSettings {
            default_category: "distance".to_string(),
            auto_convert: true,
            toast_duration_ms: 2000,
        }
    }
}

impl WidgetSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Build a converter configured by these settings.
    ///
    /// Fails with `CategoryNotFound` when `default_category` names no
    /// known category.
    pub fn converter(&self) -> CalcResult<Converter> {
        let mut converter = Converter::new(&self.default_category)?;
        converter.set_auto_convert(self.auto_convert);
        Ok(converter)
    }
}

/// Read settings from `path`, rejecting an unknown default category.
pub fn load_settings(path: &Path) -> CalcResult<WidgetSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let settings: WidgetSettings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    units::require_category(&settings.default_category)?;
    Ok(settings)
}

/// Load settings if a path is given, falling back to defaults (with a
/// warning) when the file is missing or unusable.
pub fn load_or_default(path: Option<&Path>) -> WidgetSettings {
    let Some(path) = path else {
        return WidgetSettings::default();
    };

    match load_settings(path) {
        Ok(settings) => {
            log::debug!("loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            log::warn!("using default settings: {}", e);
            WidgetSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("calc_settings_test_{}.json", name))
    }

    #[test]
    fn test_load_full_file() {
        let path = temp_settings_path("full");
        fs::write(
            &path,
            r#"{ "default_category": "temperature", "auto_convert": false, "toast_duration_ms": 500 }"#,
        )
        .unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.default_category, "temperature");
        assert!(!loaded.auto_convert);
        assert_eq!(loaded.toast_duration(), Duration::from_millis(500));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let path = temp_settings_path("partial");
        fs::write(&path, r#"{ "auto_convert": false }"#).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert!(!loaded.auto_convert);
        assert_eq!(loaded.default_category, "distance");
        assert_eq!(loaded.toast_duration(), Duration::from_millis(2000));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_stale_version_key_is_ignored() {
        let path = temp_settings_path("legacy_version");
        fs::write(&path, r#"{ "version": "9.9.9", "default_category": "weight" }"#).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.default_category, "weight");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let path = temp_settings_path("bad_category");
        fs::write(&path, r#"{ "default_category": "volume" }"#).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err, CalcError::category_not_found("volume"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let path = temp_settings_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let path = temp_settings_path("does_not_exist");
        let _ = fs::remove_file(&path);
        assert_eq!(load_or_default(Some(&path)), WidgetSettings::default());
        assert_eq!(load_or_default(None), WidgetSettings::default());
    }

    #[test]
    fn test_settings_build_converter() {
        let settings = WidgetSettings {
            default_category: "weight".to_string(),
            auto_convert: false,
            ..WidgetSettings::default()
        };
        let converter = settings.converter().unwrap();
        assert_eq!(converter.category().name(), "weight");
        assert!(!converter.auto_convert());
    }
}
