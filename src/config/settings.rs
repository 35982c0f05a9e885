//! User settings for scribe-ledger
//!
//! Settings persist as `config.json` in the base directory. The AI credential
//! is never written there; it is combined with the settings at runtime into
//! an [`AiConfig`].

use serde::{Deserialize, Serialize};

use super::paths::ScribePaths;
use crate::error::ScribeError;

/// User settings for scribe-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency code stamped on every new record
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Currency symbol used for display
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Model name passed to the AI service
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the AI service REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// How many of the most recent records feed the narrative report
    #[serde(default = "default_report_window")]
    pub report_window: usize,

    /// How many records the entry preview shows
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// Period label handed to the report generator
    #[serde(default = "default_report_period")]
    pub report_period: String,
}

fn default_currency() -> String {
    "CNY".to_string()
}

fn default_currency_symbol() -> String {
    "¥".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_report_window() -> usize {
    50
}

fn default_recent_count() -> usize {
    3
}

fn default_report_period() -> String {
    "本月".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            model: default_model(),
            api_base_url: default_api_base_url(),
            report_window: default_report_window(),
            recent_count: default_recent_count(),
            report_period: default_report_period(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ScribePaths) -> Result<Self, ScribeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ScribeError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ScribeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ScribePaths) -> Result<(), ScribeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ScribeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ScribeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Everything needed to talk to the AI service
#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl AiConfig {
    /// Combine settings with a credential
    ///
    /// A missing or blank credential is a configuration error.
    pub fn from_settings(settings: &Settings, api_key: Option<&str>) -> Result<Self, ScribeError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(ScribeError::missing_api_key)?;

        Ok(Self {
            api_key: api_key.to_string(),
            model: settings.model.clone(),
            base_url: settings.api_base_url.clone(),
        })
    }
}

// Keep the key out of debug output and logs.
impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "CNY");
        assert_eq!(settings.currency_symbol, "¥");
        assert_eq!(settings.report_window, 50);
        assert_eq!(settings.recent_count, 3);
        assert_eq!(settings.report_period, "本月");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ScribePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency = "EUR".to_string();
        settings.report_window = 10;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.report_window, 10);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency": "USD"}"#).unwrap();
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ScribePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{{{").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_ai_config_requires_key() {
        let settings = Settings::default();

        assert!(AiConfig::from_settings(&settings, None).unwrap_err().is_config());
        assert!(AiConfig::from_settings(&settings, Some("   "))
            .unwrap_err()
            .is_config());

        let config = AiConfig::from_settings(&settings, Some(" secret ")).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, settings.model);
    }

    #[test]
    fn test_ai_config_debug_hides_key() {
        let config = AiConfig::from_settings(&Settings::default(), Some("secret")).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }
}
