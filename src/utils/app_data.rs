use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::query::MAX_QUERY_TERMS;

const APP_NAME: &str = "fleetdex";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Maximum number of query terms sent to the store.
    /// 0 or anything above the store's filter arity resolves to that arity.
    #[serde(default = "default_query_term_limit")]
    pub query_term_limit: usize,

    /// Regenerate keyword sets in parallel during reindexing
    #[serde(default = "default_parallel_reindex")]
    pub parallel_reindex: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "fleetdex=debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_query_term_limit() -> usize {
    MAX_QUERY_TERMS
}

fn default_parallel_reindex() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            query_term_limit: default_query_term_limit(),
            parallel_reindex: default_parallel_reindex(),
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path, or return default if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file {}", config_path.display()))?;
        Ok(())
    }

    /// Get the effective query term limit (never above the store's arity)
    pub fn effective_query_term_limit(&self) -> usize {
        if self.query_term_limit == 0 {
            MAX_QUERY_TERMS
        } else {
            self.query_term_limit.min(MAX_QUERY_TERMS)
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create {}", app_dir.display()))?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.query_term_limit, 30);
        assert!(config.parallel_reindex);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_effective_query_term_limit() {
        let mut config = AppConfig::default();
        assert_eq!(config.effective_query_term_limit(), 30);

        // 0 resolves to the store maximum
        config.query_term_limit = 0;
        assert_eq!(config.effective_query_term_limit(), 30);

        config.query_term_limit = 10;
        assert_eq!(config.effective_query_term_limit(), 10);

        // Never above what the store accepts
        config.query_term_limit = 500;
        assert_eq!(config.effective_query_term_limit(), 30);
    }

    #[test]
    fn test_app_config_partial_json() {
        let json = r#"{"parallel_reindex": false}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert!(!config.parallel_reindex);
        assert_eq!(config.query_term_limit, 30);
    }

    #[test]
    fn test_app_config_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = AppConfig {
            query_term_limit: 12,
            parallel_reindex: false,
            log_level: Some("debug".to_string()),
        };

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }
}
