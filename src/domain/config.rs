//! # Configuration
//!
//! Manages the loading and parsing of the bot's configuration file (`config.yaml`)
//! and the environment variables that override it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::paths;

pub const ENV_PORT: &str = "PORT";
pub const ENV_TOKEN: &str = "APPLICATION_TOKEN";
pub const ENV_HOMESERVER: &str = "MATRIX_HOMESERVER";
pub const ENV_USERNAME: &str = "MATRIX_USERNAME";
pub const ENV_PASSWORD: &str = "MATRIX_PASSWORD";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
}

/// Configuration for various connected services.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ServicesConfig {
    #[serde(default)]
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
///
/// Either `access_token` (with `user_id` and `device_id`) or
/// `username`/`password` must be provided.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct MatrixConfig {
    #[serde(default)]
    pub homeserver: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Liveness endpoint settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

/// Where the Markdown documents live and how much of them a list shows.
#[derive(Debug, Deserialize, Clone)]
pub struct DocumentsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            list_limit: default_list_limit(),
        }
    }
}

fn default_data_dir() -> String {
    paths::DEFAULT_DATA_DIR.to_string()
}

fn default_list_limit() -> usize {
    crate::application::formatter::DEFAULT_LIST_LIMIT
}

impl AppConfig {
    /// Loads the configuration from `path`.
    /// A missing file is not an error: every setting has a default or an
    /// environment variable (see `apply_overrides`).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to `null`, which is not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies overrides from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(e) => tracing::warn!("Ignoring invalid {ENV_PORT}={port}: {e}"),
            }
        }
        let matrix = &mut self.services.matrix;
        if let Some(token) = lookup(ENV_TOKEN).filter(|t| !t.is_empty()) {
            matrix.access_token = Some(token);
        }
        if let Some(homeserver) = lookup(ENV_HOMESERVER) {
            matrix.homeserver = homeserver;
        }
        if let Some(username) = lookup(ENV_USERNAME) {
            matrix.username = username;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            matrix.password = password;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
services:
  matrix:
    homeserver: "https://matrix.example.com"
    username: "memo"
    password: "secret"
    display_name: "Memo Bot"
server:
  port: 8080
documents:
  data_dir: "/srv/memo"
  list_limit: 5
"#;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.services.matrix.homeserver, "https://matrix.example.com");
        assert_eq!(config.services.matrix.username, "memo");
        assert_eq!(config.services.matrix.display_name.as_deref(), Some("Memo Bot"));
        assert!(config.services.matrix.access_token.is_none());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.documents.data_dir, "/srv/memo");
        assert_eq!(config.documents.list_limit, 5);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_yaml("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.documents.data_dir, "data");
        assert_eq!(config.documents.list_limit, 10);

        let config = AppConfig::from_yaml("server: {}\n").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_PORT, "4000"),
            (ENV_TOKEN, "syt_token"),
            (ENV_HOMESERVER, "https://other.example.com"),
        ]);
        let mut config = AppConfig::from_yaml(SAMPLE).unwrap();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.services.matrix.access_token.as_deref(), Some("syt_token"));
        assert_eq!(config.services.matrix.homeserver, "https://other.example.com");
        // Untouched values survive
        assert_eq!(config.services.matrix.username, "memo");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == ENV_PORT).then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config.documents.data_dir, "data");
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "server: [unclosed").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }
}
