//! In-memory store.

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::{
    domain::{
        orders::{
            data::NewOrder,
            records::{OrderRecord, OrderUuid},
        },
        products::{data::NewProduct, records::ProductRecord},
    },
    store::{Store, StoreError},
};

/// Keeps the catalog and order log in process memory. Nothing survives a
/// restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<ProductRecord>>,
    orders: RwLock<Vec<OrderRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing catalog.
    #[must_use]
    pub fn with_products(products: Vec<ProductRecord>) -> Self {
        Self {
            products: RwLock::new(products),
            orders: RwLock::default(),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn insert_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<ProductRecord>, StoreError> {
        let records: Vec<ProductRecord> = products.into_iter().map(Into::into).collect();

        self.products.write().await.extend(records.iter().cloned());

        Ok(records)
    }

    async fn load_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(self.orders.read().await.clone())
    }

    async fn append_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError> {
        let record = order.into_record(OrderUuid::new(), Timestamp::now());

        self.orders.write().await.push(record.clone());

        Ok(record)
    }
}
