//! Process-wide configuration: API base URL, VPD base URL, and API key.
//!
//! The values are set once (programmatically or from a TOML file) and read
//! by every route function.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the NeDRex API, without a trailing slash.
    pub url_base: Option<String>,

    /// Base URL of the virtual-patient-data service, without a trailing slash.
    pub url_vpd: Option<String>,

    /// API key sent as the `x-api-key` header when set.
    pub api_key: Option<String>,
}

static CONFIG: RwLock<Config> = RwLock::new(Config {
    url_base: None,
    url_vpd: None,
    api_key: None,
});

fn read() -> Config {
    CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Sets the base URL for the NeDRex API. A trailing `/` is stripped.
pub fn set_url_base(url_base: &str) {
    let mut config = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    config.url_base = Some(url_base.trim_end_matches('/').to_string());
}

/// Sets the base URL for the virtual-patient-data service. A trailing `/`
/// is stripped.
pub fn set_url_vpd(url_vpd: &str) {
    let mut config = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    config.url_vpd = Some(url_vpd.trim_end_matches('/').to_string());
}

/// Sets the API key sent with authenticated requests.
pub fn set_api_key(key: &str) {
    let mut config = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    config.api_key = Some(key.to_string());
}

/// Clears all configured values.
pub fn reset() {
    let mut config = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    *config = Config::default();
}

/// Returns a snapshot of the current configuration.
pub fn current() -> Config {
    read()
}

pub(crate) fn url_base() -> Result<String> {
    read()
        .url_base
        .ok_or_else(|| Error::Config("API URL is not set in the config".to_string()))
}

pub(crate) fn url_vpd() -> Result<String> {
    read()
        .url_vpd
        .ok_or_else(|| Error::Config("VPD URL is not set in the config".to_string()))
}

pub(crate) fn api_key() -> Option<String> {
    read().api_key
}

impl Config {
    /// Load config from the default location. A missing file yields the
    /// default (empty) configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load config from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
        Ok(config)
    }

    /// Install this configuration as the process-wide one. URL values go
    /// through the same trailing-slash normalisation as the setters.
    pub fn apply(&self) {
        if let Some(url) = &self.url_base {
            set_url_base(url);
        }
        if let Some(url) = &self.url_vpd {
            set_url_vpd(url);
        }
        if let Some(key) = &self.api_key {
            set_api_key(key);
        }
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("nedrex").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.url_base.is_none());
        assert!(config.url_vpd.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            url_base: Some("https://api.nedrex.net".to_string()),
            url_vpd: None,
            api_key: Some("secret".to_string()),
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.url_base.as_deref(), Some("https://api.nedrex.net"));
        assert_eq!(parsed.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("url_base = \"http://localhost:8123\"").unwrap();
        assert_eq!(parsed.url_base.as_deref(), Some("http://localhost:8123"));
        assert!(parsed.api_key.is_none());
    }
}
