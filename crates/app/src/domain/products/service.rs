//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::error;

use crate::{domain::products::records::ProductRecord, store::Store};

pub struct StoreProductsService {
    store: Arc<dyn Store>,
}

impl StoreProductsService {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl Debug for StoreProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreProductsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductsService for StoreProductsService {
    async fn list_products(&self) -> Vec<ProductRecord> {
        self.store.load_products().await.unwrap_or_else(|source| {
            error!("failed to load products: {source}");

            Vec::new()
        })
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the full catalog. Read failures are logged and yield an
    /// empty list.
    async fn list_products(&self) -> Vec<ProductRecord>;
}

#[cfg(test)]
mod tests {
    use crate::store::{MemoryStore, MockStore, StoreError};

    use super::*;

    #[tokio::test]
    async fn lists_catalog_from_store() {
        let product = ProductRecord {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: 100,
        };

        let service =
            StoreProductsService::new(Arc::new(MemoryStore::with_products(vec![product.clone()])));

        assert_eq!(service.list_products().await, vec![product]);
    }

    #[tokio::test]
    async fn read_failure_yields_empty_catalog() {
        let mut store = MockStore::new();

        store.expect_load_products().once().returning(|| {
            Err(StoreError::Io {
                path: "products.json".into(),
                source: std::io::Error::other("unreadable"),
            })
        });

        let service = StoreProductsService::new(Arc::new(store));

        assert!(service.list_products().await.is_empty());
    }
}
