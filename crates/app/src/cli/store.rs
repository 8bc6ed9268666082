use std::{path::PathBuf, sync::Arc};

use clap::{Args, ValueEnum};
use storefront_app::{context::StoreConfig, store::Store};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum StoreBackend {
    Json,
    Postgres,
    Memory,
}

#[derive(Debug, Args)]
pub(crate) struct StoreArgs {
    /// Persistence backend (json, postgres, memory)
    #[arg(long, env = "STORE_BACKEND", value_enum, default_value_t = StoreBackend::Json)]
    store_backend: StoreBackend,

    /// Directory holding products.json and orders.json
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,
}

impl StoreArgs {
    pub(crate) async fn open(self) -> Result<Arc<dyn Store>, String> {
        let config = match self.store_backend {
            StoreBackend::Json => StoreConfig::JsonFile {
                data_dir: self.data_dir,
            },
            StoreBackend::Memory => StoreConfig::Memory,
            StoreBackend::Postgres => StoreConfig::Postgres {
                database_url: self
                    .database_url
                    .ok_or("DATABASE_URL is required for the postgres backend")?,
            },
        };

        config
            .open()
            .await
            .map_err(|error| format!("failed to open store: {error}"))
    }
}
