//! `AppConfig` struct and TOML read/write.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

/// Keys accepted by `config set`.
pub const TMDB_KEYS: &[&str] = &[
    "base_url",
    "language",
    "region",
    "include_adult",
    "timeout_secs",
];

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq, Clone)]
pub struct AppConfig {
    /// TMDB client settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// `[tmdb]` table. Unset values fall back to the client defaults.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq, Clone)]
pub struct TmdbConfig {
    /// API base URL (e.g. a local proxy).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Default response language (e.g. `ja-JP`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Default region (e.g. `JP`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Default adult content filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    /// Whole-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl TmdbConfig {
    /// Updates one key from its string form. An empty value clears the key.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let value = (!value.is_empty()).then_some(value);
        match key {
            "base_url" => {
                if let Some(v) = value {
                    Url::parse(v).with_context(|| format!("invalid base_url '{v}'"))?;
                }
                self.base_url = value.map(String::from);
            }
            "language" => self.language = value.map(String::from),
            "region" => self.region = value.map(String::from),
            "include_adult" => {
                self.include_adult = value
                    .map(str::parse::<bool>)
                    .transpose()
                    .context("include_adult must be true or false")?;
            }
            "timeout_secs" => {
                let secs = value
                    .map(str::parse::<u64>)
                    .transpose()
                    .context("timeout_secs must be a whole number of seconds")?;
                if secs == Some(0) {
                    bail!("timeout_secs must be at least 1 (clear it to disable the timeout)");
                }
                self.timeout_secs = secs;
            }
            other => bail!(
                "unknown config key '{other}' (expected one of: {})",
                TMDB_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Request timeout, if configured. Zero means no timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert_eq!(config.tmdb, TmdbConfig::default());
        assert!(config.tmdb.timeout().is_none());
    }

    #[test]
    fn test_parse_tmdb_table() {
        // Arrange
        let toml_str = r#"
[tmdb]
base_url = "http://127.0.0.1:8080/3"
language = "ja-JP"
region = "JP"
include_adult = true
timeout_secs = 15
"#;

        // Act
        let config: AppConfig = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.tmdb.language.as_deref(), Some("ja-JP"));
        assert_eq!(config.tmdb.include_adult, Some(true));
        assert_eq!(config.tmdb.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            tmdb: TmdbConfig {
                language: Some(String::from("de-DE")),
                timeout_secs: Some(30),
                ..TmdbConfig::default()
            },
        };

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("region"));
    }

    #[test]
    fn test_load_empty_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tmdb]\ninclude_adult = \"maybe\"\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }

    #[test]
    fn test_set_and_clear_keys() {
        // Arrange
        let mut config = TmdbConfig::default();

        // Act
        config.set("language", "ko-KR").unwrap();
        config.set("include_adult", "true").unwrap();
        config.set("timeout_secs", "10").unwrap();
        config.set("region", "KR").unwrap();
        config.set("region", "").unwrap();

        // Assert
        assert_eq!(config.language.as_deref(), Some("ko-KR"));
        assert_eq!(config.include_adult, Some(true));
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.region, None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        // Arrange
        let mut config = TmdbConfig::default();

        // Act & Assert
        assert!(config.set("include_adult", "yes").is_err());
        assert!(config.set("timeout_secs", "-1").is_err());
        assert!(config.set("base_url", "not a url").is_err());
        let err = config.set("api_key", "x").unwrap_err();
        assert!(err.to_string().contains("unknown config key 'api_key'"));
        assert_eq!(config, TmdbConfig::default());
    }

    #[test]
    fn test_zero_timeout_is_rejected_or_ignored() {
        // Arrange
        let mut config = TmdbConfig::default();
        let from_file: AppConfig = toml::from_str("[tmdb]\ntimeout_secs = 0\n").unwrap();

        // Act
        let result = config.set("timeout_secs", "0");

        // Assert
        assert!(result.unwrap_err().to_string().contains("at least 1"));
        assert_eq!(config.timeout_secs, None);
        assert_eq!(from_file.tmdb.timeout_secs, Some(0));
        assert!(from_file.tmdb.timeout().is_none());
    }
}
