//! Server configuration loader for docfolio.
//!
//! Reads `config.toml` from the data directory (`~/.docfolio/` in production)
//! and deserializes it into [`ServerConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use docfolio_types::config::ServerConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "DOCFOLIO_DATA_DIR";

/// Environment variable overriding `web_dir`.
pub const WEB_DIR_ENV: &str = "DOCFOLIO_WEB_DIR";

/// Load server configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config; omitted keys take their defaults.
pub async fn load_config(data_dir: &Path) -> ServerConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServerConfig::default()
        }
    }
}

/// Apply `DOCFOLIO_WEB_DIR` on top of a loaded config.
pub fn apply_env_overrides(config: ServerConfig) -> ServerConfig {
    override_web_dir(config, std::env::var(WEB_DIR_ENV).ok())
}

fn override_web_dir(mut config: ServerConfig, web_dir: Option<String>) -> ServerConfig {
    if let Some(dir) = web_dir.filter(|d| !d.is_empty()) {
        config.web_dir = PathBuf::from(dir);
    }
    config
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `DOCFOLIO_DATA_DIR` environment variable
/// 2. `~/.docfolio`
/// 3. `.docfolio` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var(DATA_DIR_ENV).ok())
}

fn data_dir_from(explicit: Option<String>) -> PathBuf {
    if let Some(dir) = explicit {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".docfolio");
    }

    PathBuf::from(".docfolio")
}
