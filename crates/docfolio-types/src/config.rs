//! Server configuration types for docfolio.
//!
//! `ServerConfig` represents the top-level `config.toml` controlling where
//! the site is served from, which seed file pre-populates the store, and
//! the gallery page size.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built presentation bundle (index.html + assets).
    #[serde(default = "default_web_dir")]
    pub web_dir: PathBuf,

    /// Alternative seed document; the bundled catalogue is used when unset.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Gallery cards revealed per "load more" step.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("client/dist")
}

fn default_page_size() -> usize {
    6
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
            seed_path: None,
            page_size: default_page_size(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.web_dir, PathBuf::from("client/dist"));
        assert!(config.seed_path.is_none());
        assert_eq!(config.page_size, 6);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_config_deserialize_with_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn test_server_config_deserialize_with_values() {
        let toml_str = r#"
host = "0.0.0.0"
port = 3000
web_dir = "/srv/site"
seed_path = "/etc/docfolio/seed.json"
page_size = 9
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.web_dir, PathBuf::from("/srv/site"));
        assert_eq!(
            config.seed_path,
            Some(PathBuf::from("/etc/docfolio/seed.json"))
        );
        assert_eq!(config.page_size, 9);
    }
}
