use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Port the bundled API server listens on, and the client connects to
    /// unless `server_url` overrides it.
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Point the client at a store other than the bundled server.
    #[serde(default)]
    pub server_url: Option<String>,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_api_port() -> u16 {
    4000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            api_port: default_api_port(),
            server_url: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    /// Base url of the store the client talks to.
    pub fn store_url(&self) -> String {
        match &self.server_url {
            Some(url) => url.clone(),
            None => format!("http://127.0.0.1:{}", self.api_port),
        }
    }

    /// The bundled server is only managed when no external store is configured.
    pub fn manages_server(&self) -> bool {
        self.server_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.api_port, 4000);
        assert!(config.server_url.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("theme"));
        assert!(toml_str.contains("api_port"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        theme = "dark"
        api_port = 5151
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.api_port, 5151);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.api_port, 4000);
        assert!(config.server_url.is_none());
    }

    #[test]
    fn test_store_url_from_port() {
        let config = Config::default();
        assert_eq!(config.store_url(), "http://127.0.0.1:4000");
        assert!(config.manages_server());
    }

    #[test]
    fn test_store_url_override() {
        let config: Config = toml::from_str(r#"server_url = "http://todos.example:9000""#).unwrap();
        assert_eq!(config.store_url(), "http://todos.example:9000");
        assert!(!config.manages_server());
    }
}
