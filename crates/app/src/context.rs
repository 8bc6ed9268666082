//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;
use tracing::info;

use crate::{
    domain::{
        ledger::{LedgerService, StoreLedgerService, config::DiscountConfig},
        products::{ProductsService, StoreProductsService},
    },
    store::{JsonFileStore, MemoryStore, PgStore, Store, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open store")]
    Store(#[source] StoreError),

    #[error("failed to replay order history")]
    Replay(#[source] StoreError),
}

/// Which backend persists the catalog and order log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Process memory only.
    Memory,

    /// `products.json` and `orders.json` under `data_dir`.
    JsonFile { data_dir: PathBuf },

    /// `PostgreSQL` at `database_url`.
    Postgres { database_url: String },
}

impl StoreConfig {
    /// Open the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the Postgres backend cannot connect.
    pub async fn open(&self) -> Result<Arc<dyn Store>, AppInitError> {
        let store: Arc<dyn Store> = match self {
            Self::Memory => Arc::new(MemoryStore::new()),
            Self::JsonFile { data_dir } => Arc::new(JsonFileStore::new(data_dir)),
            Self::Postgres { database_url } => Arc::new(
                PgStore::connect(database_url)
                    .await
                    .map_err(AppInitError::Store)?,
            ),
        };

        info!(backend = ?self, "store opened");

        Ok(store)
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub ledger: Arc<dyn LedgerService>,
}

impl AppContext {
    /// Build application context from store settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be opened or its order history
    /// cannot be replayed.
    pub async fn from_store_config(
        store: &StoreConfig,
        discounts: DiscountConfig,
    ) -> Result<Self, AppInitError> {
        Self::from_store(store.open().await?, discounts).await
    }

    /// Build application context around an already opened store.
    ///
    /// # Errors
    ///
    /// Returns an error when the order history cannot be replayed.
    pub async fn from_store(
        store: Arc<dyn Store>,
        discounts: DiscountConfig,
    ) -> Result<Self, AppInitError> {
        let ledger = StoreLedgerService::open(store.clone(), discounts)
            .await
            .map_err(AppInitError::Replay)?;

        Ok(Self {
            products: Arc::new(StoreProductsService::new(store)),
            ledger: Arc::new(ledger),
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::test::helpers::{checkout, new_order};

    use super::*;

    #[tokio::test]
    async fn json_context_resumes_counts_after_restart() -> TestResult {
        let dir = TempDir::new()?;
        let config = StoreConfig::JsonFile {
            data_dir: dir.path().to_path_buf(),
        };

        let discounts = DiscountConfig::new(2, 10)?;

        let first = AppContext::from_store_config(&config, discounts).await?;

        first.ledger.checkout(checkout("abc", 100, None)).await?;

        let restarted = AppContext::from_store_config(&config, discounts).await?;
        let receipt = restarted.ledger.checkout(checkout("abc", 100, None)).await?;

        assert!(receipt.new_discount_generated, "second order overall earns a code");
        assert_eq!(restarted.ledger.stats().await.order_count, 2);

        Ok(())
    }

    #[tokio::test]
    async fn replay_failure_is_reported() -> TestResult {
        let dir = TempDir::new()?;

        std::fs::write(dir.path().join("orders.json"), b"[")?;

        let result = AppContext::from_store_config(
            &StoreConfig::JsonFile {
                data_dir: dir.path().to_path_buf(),
            },
            DiscountConfig::default(),
        )
        .await;

        assert!(
            matches!(result, Err(AppInitError::Replay(StoreError::Json { .. }))),
            "expected Replay error"
        );

        Ok(())
    }

    #[tokio::test]
    async fn memory_context_starts_empty() -> TestResult {
        let store = StoreConfig::Memory.open().await?;

        store.append_order(new_order("abc", 100)).await?;

        let context = AppContext::from_store(store, DiscountConfig::default()).await?;

        assert_eq!(context.ledger.running_stats().await.order_count, 1);
        assert!(context.products.list_products().await.is_empty());

        Ok(())
    }
}
