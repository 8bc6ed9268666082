//! JSON file store.
//!
//! Products and orders live in `products.json` and `orders.json` under a data
//! directory, each wrapped in a single top-level key.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tokio::{fs, sync::Mutex};
use tracing::debug;

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

const PRODUCTS_FILE: &str = "products.json";
const ORDERS_FILE: &str = "orders.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProductsFile {
    products: Vec<ProductRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OrdersFile {
    orders: Vec<OrderRecord>,
}

#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    // Serialises read-modify-write cycles on the data files.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn products_path(&self) -> PathBuf {
        self.data_dir.join(PRODUCTS_FILE)
    }

    fn orders_path(&self) -> PathBuf {
        self.data_dir.join(ORDERS_FILE)
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn load_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let file: ProductsFile = read_json(&self.products_path()).await?;

        Ok(file.products)
    }

    async fn insert_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<ProductRecord>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.products_path();

        let mut file: ProductsFile = read_json(&path).await?;
        let records: Vec<ProductRecord> = products.into_iter().map(Into::into).collect();

        file.products.extend(records.iter().cloned());

        write_json(&path, &file).await?;

        Ok(records)
    }

    async fn load_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        let file: OrdersFile = read_json(&self.orders_path()).await?;

        Ok(file.orders)
    }

    async fn append_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.orders_path();

        let mut file: OrdersFile = read_json(&path).await?;
        let record = order.into_record(OrderUuid::new(), Timestamp::now());

        file.orders.push(record.clone());

        write_json(&path, &file).await?;

        debug!(order = %record.id, path = %path.display(), "order appended");

        Ok(record)
    }
}

/// Read and decode a data file. A missing file reads as the default value.
async fn read_json<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(source) if source.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode and replace a data file via a sibling temporary file.
async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let encoded = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let tmp = path.with_extension("json.tmp");

    fs::write(&tmp, encoded).await.map_err(io_error)?;
    fs::rename(&tmp, path).await.map_err(io_error)?;

    Ok(())
}
