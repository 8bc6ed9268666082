//! Order Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
///
/// Written exactly once per successful checkout and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: OrderUuid,
    pub user_id: String,
    /// Items in checkout order.
    pub items: Vec<OrderItemRecord>,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
    /// The discount code consumed by this order, if any.
    pub redeemed_code: Option<String>,
    pub created_at: Timestamp,
}

impl OrderRecord {
    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Order Item Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRecord {
    /// Product identifier
    pub id: String,
    pub name: String,
    /// Unit price in minor units at the time of checkout.
    pub price: u64,
    pub quantity: u32,
}

impl OrderItemRecord {
    /// Price multiplied by quantity, `None` on overflow.
    pub fn line_total(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }
}
