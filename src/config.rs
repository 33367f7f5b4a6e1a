//! Configuration handling for the TUI

use crate::schema::SchemaRegistry;
use crate::state::DEFAULT_TOAST_DURATION;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const LOG_FILE: &str = "dynaform-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// JSON schema document replacing the built-in form types
    pub schema_path: Option<PathBuf>,
    /// Form type selected on startup
    pub default_form_type: Option<String>,
    /// How long a toast stays on screen
    pub toast_duration_ms: Option<u64>,
    /// Ease the progress bar between values
    pub animate_progress: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "dynaform", "dynaform-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file location, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let config: TuiConfig = serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }

    pub fn animate_progress(&self) -> bool {
        self.animate_progress.unwrap_or(true)
    }

    /// Schema from `schema_path`, or the built-in form types
    pub fn load_schema(&self) -> Result<SchemaRegistry> {
        match &self.schema_path {
            Some(path) => SchemaRegistry::load(path)
                .with_context(|| format!("loading schema from {}", path.display())),
            None => Ok(SchemaRegistry::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.schema_path.is_none());
        assert!(config.default_form_type.is_none());
        assert!(config.toast_duration_ms.is_none());
        assert!(config.animate_progress.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = TuiConfig::default();
        assert_eq!(config.toast_duration(), DEFAULT_TOAST_DURATION);
        assert!(config.animate_progress());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            schema_path: Some(PathBuf::from("/tmp/forms.json")),
            default_form_type: Some("address".to_string()),
            toast_duration_ms: Some(1500),
            animate_progress: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.schema_path, Some(PathBuf::from("/tmp/forms.json")));
        assert_eq!(parsed.default_form_type, Some("address".to_string()));
        assert_eq!(parsed.toast_duration(), Duration::from_millis(1500));
        assert!(!parsed.animate_progress());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.default_form_type.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"default_form_type": "payment", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.default_form_type, Some("payment".to_string()));
    }

    #[test]
    fn test_load_schema_defaults_to_builtin() {
        let schema = TuiConfig::default().load_schema().unwrap();
        assert_eq!(schema.ids().collect::<Vec<_>>(), vec!["userInfo", "address", "payment"]);
    }

    #[test]
    fn test_load_schema_reports_missing_file() {
        let config = TuiConfig {
            schema_path: Some(PathBuf::from("/nonexistent/dynaform/forms.json")),
            ..Default::default()
        };
        let err = config.load_schema().unwrap_err();
        assert!(err.to_string().contains("loading schema"));
    }

    #[test]
    fn test_log_path_names_log_file() {
        if let Some(path) = TuiConfig::log_path() {
            assert!(path.ends_with(LOG_FILE));
        }
    }
}
