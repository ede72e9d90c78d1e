//! Application state wiring the store and service together.
//!
//! The service is generic over the store traits; AppState pins it to the
//! in-memory store.

use std::path::PathBuf;
use std::sync::Arc;

use docfolio_core::service::PortfolioService;
use docfolio_infra::config::{apply_env_overrides, load_config, resolve_data_dir};
use docfolio_infra::memory::MemoryStore;
use docfolio_infra::seed::load_seed;
use docfolio_types::config::ServerConfig;

pub type ConcretePortfolioService = PortfolioService<MemoryStore>;

/// Shared application state used by the CLI commands and the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ConcretePortfolioService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire state around an already-built store.
    pub fn new(store: MemoryStore, config: ServerConfig) -> Self {
        Self {
            service: Arc::new(PortfolioService::new(store)),
            config: Arc::new(config),
        }
    }

    /// Seed a fresh store per `config.seed_path` (bundled catalogue when unset).
    pub async fn seeded(config: ServerConfig) -> anyhow::Result<Self> {
        let seed = load_seed(config.seed_path.as_deref()).await?;
        let store = MemoryStore::seeded(seed)?;
        Ok(Self::new(store, config))
    }
}

/// Load the config from the data directory and apply env overrides.
pub async fn load_server_config() -> (PathBuf, ServerConfig) {
    let data_dir = resolve_data_dir();
    let config = apply_env_overrides(load_config(&data_dir).await);
    tracing::debug!(data_dir = %data_dir.display(), ?config, "configuration loaded");
    (data_dir, config)
}
