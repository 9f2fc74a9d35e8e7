// File: src/config.rs
// Purpose: Configuration parsing from crumbtrail.toml

use anyhow::{Context, Result};
use crumbtrail::RouteMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub breadcrumb: BreadcrumbConfig,

    /// Path-to-label entries consulted by the generator.
    #[serde(default)]
    pub routes: RouteMap,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Breadcrumb presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreadcrumbConfig {
    /// Whether to prepend the fixed home entry (default: true)
    #[serde(default = "default_true")]
    pub show_home: bool,

    /// Separator placed between entries (default: "/")
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Extra class on the `<nav>` element (default: none)
    #[serde(default)]
    pub class_name: String,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_separator() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            show_home: true,
            separator: default_separator(),
            class_name: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from crumbtrail.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./crumbtrail.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("crumbtrail.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.breadcrumb.show_home);
        assert_eq!(config.breadcrumb.separator, "/");
        assert!(config.routes.labels.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.breadcrumb.separator, "/");
    }

    #[test]
    fn test_custom_config() {
        let toml = r#"
            [server]
            port = 8080

            [breadcrumb]
            show_home = false
            separator = "›"

            [routes]
            dynamic = ":id Detail"

            [routes.labels]
            "/users" = "Our Users"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.breadcrumb.show_home);
        assert_eq!(config.breadcrumb.separator, "›");
        assert_eq!(config.routes.dynamic.as_deref(), Some(":id Detail"));
        assert_eq!(
            config.routes.labels.get("/users"),
            Some(&"Our Users".to_string())
        );
    }
}
