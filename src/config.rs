//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which includes an optional API base URL override and the last used
//! username. The session token itself is persisted separately in the data
//! directory (see `auth::session`).
//!
//! Configuration is stored at `~/.config/clinic-admin/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "clinic-admin";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the admin API base URL
const API_URL_ENV: &str = "CLINIC_ADMIN_API_URL";

/// Default admin API root when neither the environment nor the config file
/// provides one
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the admin API base URL. Precedence: environment variable,
    /// config file, built-in default.
    pub fn api_base_url(&self) -> String {
        resolve_base_url(std::env::var(API_URL_ENV).ok(), self.api_url.as_deref())
    }

    /// Directory holding the persisted session file
    pub fn data_dir(&self) -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}

fn resolve_base_url(env: Option<String>, file: Option<&str>) -> String {
    env.filter(|v| !v.is_empty())
        .or_else(|| file.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_prefers_env() {
        let url = resolve_base_url(
            Some("https://api.example.com".to_string()),
            Some("https://file.example.com"),
        );
        assert_eq!(url, "https://api.example.com");
    }

    #[test]
    fn test_resolve_base_url_ignores_empty_env() {
        let url = resolve_base_url(Some(String::new()), Some("https://file.example.com"));
        assert_eq!(url, "https://file.example.com");
    }

    #[test]
    fn test_resolve_base_url_default() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_API_URL);
    }
}
