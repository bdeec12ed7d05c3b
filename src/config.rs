//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Name of the durable storage document inside the data directory
const STORAGE_FILE: &str = "storage.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Marketplace API configuration
    pub api: ApiConfig,
    /// Durable storage configuration
    pub storage: StorageConfig,
    /// UI configuration
    pub ui: UiConfig,
}

/// Marketplace API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the REST API
    pub base_url: String,
    /// Request timeout (in seconds)
    pub timeout_secs: u64,
}

/// Durable storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the storage document
    pub data_dir: PathBuf,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// How long notices stay on screen (in seconds)
    pub notice_duration_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_secs: 30,
            },
            storage: StorageConfig {
                data_dir: default_data_dir(),
            },
            ui: UiConfig {
                notice_duration_secs: 5,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api: ApiConfig {
                base_url: env::var("MARKETPLACE_API_URL").unwrap_or(defaults.api.base_url),
                timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.api.timeout_secs),
            },
            storage: StorageConfig {
                data_dir: env::var_os("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.data_dir),
            },
            ui: UiConfig {
                notice_duration_secs: env::var("NOTICE_DURATION_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.ui.notice_duration_secs),
            },
        }
    }
}

impl StorageConfig {
    /// Path of the durable storage document
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }
}

impl UiConfig {
    /// Notice lifetime
    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_duration_secs)
    }
}

/// Default to ~/.agent-marketplace or a directory in the working directory
fn default_data_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".agent-marketplace"),
        None => PathBuf::from(".agent-marketplace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.notice_duration(), Duration::from_secs(5));
        assert!(config.storage.data_dir.ends_with(".agent-marketplace"));
    }

    #[test]
    fn test_storage_path() {
        let storage = StorageConfig {
            data_dir: PathBuf::from("/tmp/marketplace"),
        };
        assert_eq!(
            storage.storage_path(),
            PathBuf::from("/tmp/marketplace/storage.json")
        );
    }
}
