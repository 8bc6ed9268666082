//! Store Config

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use storefront_app::context::StoreConfig;
use thiserror::Error;

/// Persistence backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// JSON files under the data directory.
    Json,

    /// `PostgreSQL`.
    Postgres,

    /// Process memory; lost on exit.
    Memory,
}

#[derive(Debug, Error)]
#[error("DATABASE_URL is required when STORE_BACKEND is postgres")]
pub struct MissingDatabaseUrl;

/// Store settings.
#[derive(Debug, Args)]
pub struct StoreSettings {
    /// Persistence backend (json, postgres, memory)
    #[arg(long, env = "STORE_BACKEND", value_enum, default_value_t = StoreBackend::Json)]
    pub store_backend: StoreBackend,

    /// Directory holding products.json and orders.json
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

impl StoreSettings {
    /// # Errors
    ///
    /// Returns an error when the postgres backend is selected without a URL.
    pub fn store_config(&self) -> Result<StoreConfig, MissingDatabaseUrl> {
        Ok(match self.store_backend {
            StoreBackend::Json => StoreConfig::JsonFile {
                data_dir: self.data_dir.clone(),
            },
            StoreBackend::Postgres => StoreConfig::Postgres {
                database_url: self.database_url.clone().ok_or(MissingDatabaseUrl)?,
            },
            StoreBackend::Memory => StoreConfig::Memory,
        })
    }
}
