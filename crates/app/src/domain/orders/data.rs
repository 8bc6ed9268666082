//! Order Data

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::orders::records::{OrderItemRecord, OrderRecord, OrderUuid};

/// A product and quantity as submitted at checkout.
///
/// Carts only exist client-side; the service sees them once, at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl From<CartItem> for OrderItemRecord {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// New Checkout Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckout {
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub discount_code: Option<String>,
}

/// New Order Data
///
/// An order that has been priced but not yet assigned an identifier or
/// timestamp by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: String,
    pub items: Vec<OrderItemRecord>,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
    pub redeemed_code: Option<String>,
}

impl NewOrder {
    /// Attach store-assigned identity to produce the persisted record.
    #[must_use]
    pub fn into_record(self, id: OrderUuid, created_at: Timestamp) -> OrderRecord {
        OrderRecord {
            id,
            user_id: self.user_id,
            items: self.items,
            subtotal: self.subtotal,
            discount: self.discount,
            total: self.total,
            redeemed_code: self.redeemed_code,
            created_at,
        }
    }
}
