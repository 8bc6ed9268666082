//! Durable store collaborator.
//!
//! The ledger only ever talks to a [`Store`]; the backend (JSON file, Postgres
//! or memory) is chosen at startup.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    orders::{data::NewOrder, records::OrderRecord},
    products::{data::NewProduct, records::ProductRecord},
};

mod errors;
mod json;
mod memory;
mod postgres;

pub use errors::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[automock]
#[async_trait]
pub trait Store: Send + Sync {
    /// Retrieves the full product catalog.
    async fn load_products(&self) -> Result<Vec<ProductRecord>, StoreError>;

    /// Adds products to the catalog, returning the stored records.
    async fn insert_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<ProductRecord>, StoreError>;

    /// Retrieves every persisted order, oldest first.
    async fn load_orders(&self) -> Result<Vec<OrderRecord>, StoreError>;

    /// Persists an order, assigning its identifier and creation time.
    async fn append_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError>;
}
