// Configuration loading.
// Layers defaults, an optional JSON file in the platform config dir, and env overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_BASE;
use crate::error::{BlogError, Result};
use crate::fetcher::DEFAULT_LIMIT;

pub const ENV_API_BASE: &str = "BLOGSTORE_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "BLOGSTORE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collection endpoint, e.g. `https://host/posts`.
    pub api_base: String,
    /// Per-request transport timeout.
    pub request_timeout_secs: u64,
    /// Default `limit` for stateless page fetches.
    pub fetch_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            fetch_limit: DEFAULT_LIMIT,
        }
    }
}

/// Get the config directory (~/.config/blogstore on Linux).
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "blogstore").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the optional config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

impl Config {
    /// Load from the default config file (if any) and the process environment.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file, falling back to defaults when it does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Apply environment overrides through a lookup function.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE) {
            self.api_base = base;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = raw.trim().parse().map_err(|_| {
                BlogError::Config(format!(
                    "{} must be a whole number, got {:?}",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
        }

        Ok(())
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(BlogError::Config("api_base is empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(BlogError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.fetch_limit == 0 {
            return Err(BlogError::Config("fetch_limit must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.fetch_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"api_base": "http://localhost:9000/posts"}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.api_base, "http://localhost:9000/posts");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();

        assert!(matches!(Config::from_file(&path), Err(BlogError::Json(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_API_BASE, "http://127.0.0.1:8080/posts"),
            (ENV_TIMEOUT_SECS, " 5 "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_base, "http://127.0.0.1:8080/posts");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_env() {
        let mut config = Config::default();
        let err = config
            .apply_env(|key| (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, BlogError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path() {
        if let Some(path) = config_path() {
            assert!(path.ends_with("config.json"));
        }
    }
}
