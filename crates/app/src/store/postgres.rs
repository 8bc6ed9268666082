//! Postgres store.

use std::error::Error as StdError;

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use tracing::debug;
use uuid::Uuid;

use crate::{
    database::{self, Db},
    domain::{
        orders::{
            data::NewOrder,
            records::{OrderItemRecord, OrderRecord, OrderUuid},
        },
        products::{data::NewProduct, records::ProductRecord},
    },
    store::{Store, StoreError},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const LIST_ORDER_ITEMS_SQL: &str = include_str!("sql/list_order_items.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");

#[derive(Debug, Clone)]
pub struct PgStore {
    db: Db,
}

impl PgStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Connect to `PostgreSQL` and make sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or creating the schema fails.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = database::connect(database_url).await?;

        database::ensure_schema(&pool).await?;

        Ok(Self::new(Db::new(pool)))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn load_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let mut tx = self.db.begin().await?;

        let products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn insert_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<ProductRecord>, StoreError> {
        let mut tx = self.db.begin().await?;
        let mut created = Vec::with_capacity(products.len());

        for product in products {
            let record = query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
                .bind(product.id)
                .bind(product.name)
                .bind(encode_amount(product.price, "price")?)
                .fetch_one(&mut *tx)
                .await?;

            created.push(record);
        }

        tx.commit().await?;

        Ok(created)
    }

    async fn load_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        let mut tx = self.db.begin().await?;

        let orders = query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&mut *tx)
            .await?;

        let orders = attach_items(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn append_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError> {
        let id = OrderUuid::new();
        let mut tx = self.db.begin().await?;

        let (created_at,): (SqlxTimestamp,) = query_as(CREATE_ORDER_SQL)
            .bind(id.into_uuid())
            .bind(&order.user_id)
            .bind(encode_amount(order.subtotal, "subtotal")?)
            .bind(encode_amount(order.discount, "discount")?)
            .bind(encode_amount(order.total, "total")?)
            .bind(order.redeemed_code.as_deref())
            .fetch_one(&mut *tx)
            .await?;

        for (position, item) in order.items.iter().enumerate() {
            let position = i32::try_from(position).map_err(|e| encode_error("position", e))?;
            let quantity = i32::try_from(item.quantity).map_err(|e| encode_error("quantity", e))?;

            query(CREATE_ORDER_ITEM_SQL)
                .bind(id.into_uuid())
                .bind(position)
                .bind(&item.id)
                .bind(&item.name)
                .bind(encode_amount(item.price, "price")?)
                .bind(quantity)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        debug!(order = %id, "order appended");

        Ok(order.into_record(id, created_at.to_jiff()))
    }
}

/// Load the lines for `orders` and attach them in checkout order.
async fn attach_items(
    tx: &mut Transaction<'_, Postgres>,
    mut orders: Vec<OrderRecord>,
) -> Result<Vec<OrderRecord>, sqlx::Error> {
    if orders.is_empty() {
        return Ok(orders);
    }

    let uuids: Vec<Uuid> = orders.iter().map(|order| order.id.into_uuid()).collect();

    let rows = query_as::<Postgres, OrderItemRow>(LIST_ORDER_ITEMS_SQL)
        .bind(uuids)
        .fetch_all(&mut **tx)
        .await?;

    let mut items: FxHashMap<Uuid, Vec<OrderItemRecord>> = FxHashMap::default();

    for row in rows {
        items.entry(row.order_uuid).or_default().push(row.item);
    }

    for order in &mut orders {
        if let Some(lines) = items.remove(&order.id.into_uuid()) {
            order.items = lines;
        }
    }

    Ok(orders)
}

struct OrderItemRow {
    order_uuid: Uuid,
    item: OrderItemRecord,
}

impl<'r> FromRow<'r, PgRow> for OrderItemRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        Ok(Self {
            order_uuid: row.try_get("order_uuid")?,
            item: OrderItemRecord {
                id: row.try_get("product_id")?,
                name: row.try_get("name")?,
                price: try_get_amount(row, "price")?,
                quantity: u32::try_from(quantity).map_err(|e| decode_error("quantity", e))?,
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_id: row.try_get("user_id")?,
            items: Vec::new(),
            subtotal: try_get_amount(row, "subtotal")?,
            discount: try_get_amount(row, "discount")?,
            total: try_get_amount(row, "total")?,
            redeemed_code: row.try_get("redeemed_code")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
        })
    }
}

fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| decode_error(col, e))
}

fn encode_amount(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| encode_error(col, e))
}

fn decode_error(col: &str, source: impl StdError + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(source),
    }
}

fn encode_error(col: &str, source: impl StdError) -> sqlx::Error {
    sqlx::Error::Encode(format!("{col} out of range: {source}").into())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestDb, helpers::new_order};

    use super::*;

    fn store(test_db: &TestDb) -> PgStore {
        PgStore::new(Db::new(test_db.pool().clone()))
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the Postgres container"]
    async fn append_order_round_trips_items_in_order() -> TestResult {
        let test_db = TestDb::new().await;
        let store = store(&test_db);

        let mut order = new_order("abc", 0);

        order.items = vec![
            OrderItemRecord {
                id: "p2".to_string(),
                name: "Product 2".to_string(),
                price: 200,
                quantity: 1,
            },
            OrderItemRecord {
                id: "p1".to_string(),
                name: "Product 1".to_string(),
                price: 100,
                quantity: 3,
            },
        ];
        order.subtotal = 500;
        order.total = 500;

        let appended = store.append_order(order).await?;
        let loaded = store.load_orders().await?;

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.first(), Some(&appended));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the Postgres container"]
    async fn duplicate_product_is_rejected() -> TestResult {
        let test_db = TestDb::new().await;
        let store = store(&test_db);

        let product = NewProduct {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: 100,
        };

        store.insert_products(vec![product.clone()]).await?;

        let result = store.insert_products(vec![product]).await;

        assert!(
            matches!(result, Err(StoreError::Sql(_))),
            "expected Sql error, got {result:?}"
        );

        Ok(())
    }
}
