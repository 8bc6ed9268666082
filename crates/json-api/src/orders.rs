//! Order response models shared by checkout and admin statistics.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::records::{OrderItemRecord, OrderRecord};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// Order number assigned when the order was persisted
    pub id: Uuid,

    pub user_id: String,

    /// Items in checkout order
    pub items: Vec<OrderItemResponse>,

    pub subtotal: u64,

    pub discount: u64,

    pub total: u64,

    /// Discount code consumed by this order
    pub redeemed_code: Option<String>,

    /// The date and time the order was placed
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            id: order.id.into_uuid(),
            user_id: order.user_id,
            items: order.items.into_iter().map(Into::into).collect(),
            subtotal: order.subtotal,
            discount: order.discount,
            total: order.total,
            redeemed_code: order.redeemed_code,
            created_at: order.created_at.to_string(),
        }
    }
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// Product identifier
    pub id: String,

    pub name: String,

    /// Unit price in minor units at checkout
    pub price: u64,

    pub quantity: u32,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}
