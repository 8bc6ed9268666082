//! Create Checkout Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    ledger::receipt::Receipt,
    orders::data::{CartItem, NewCheckout},
    validation::validate_checkout,
};

use crate::{checkout::into_status_error, extensions::*, orders::OrderItemResponse};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest {
    /// Identifier of the ordering user
    pub user_id: String,

    /// Cart contents in display order
    pub items: Vec<CheckoutItemRequest>,

    /// Discount code to redeem; empty means none
    #[serde(default)]
    pub discount_code: Option<String>,
}

/// Checkout Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutItemRequest {
    pub id: String,
    pub name: String,
    /// Unit price in minor units
    pub price: u64,
    pub quantity: u32,
}

impl From<CheckoutItemRequest> for CartItem {
    fn from(item: CheckoutItemRequest) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<CheckoutRequest> for NewCheckout {
    fn from(request: CheckoutRequest) -> Self {
        Self {
            user_id: request.user_id,
            items: request.items.into_iter().map(Into::into).collect(),
            discount_code: request.discount_code.filter(|code| !code.is_empty()),
        }
    }
}

/// Receipt Response
///
/// The persisted order together with the user's reward status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptResponse {
    /// Order number
    pub id: Uuid,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
    pub redeemed_code: Option<String>,
    pub created_at: String,

    /// Orders remaining until the next discount code is issued
    pub next_discount_in: u32,

    /// The user's oldest unredeemed discount code
    pub available_discount_code: Option<String>,

    /// Percentage granted by a discount code
    pub discount_percent: u8,

    /// Whether this order earned a new discount code
    pub new_discount_generated: bool,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        let order = receipt.order;

        Self {
            id: order.id.into_uuid(),
            user_id: order.user_id,
            items: order.items.into_iter().map(Into::into).collect(),
            subtotal: order.subtotal,
            discount: order.discount,
            total: order.total,
            redeemed_code: order.redeemed_code,
            created_at: order.created_at.to_string(),
            next_discount_in: receipt.next_discount_in,
            available_discount_code: receipt.available_discount_code,
            discount_percent: receipt.discount_percent,
            new_discount_generated: receipt.new_discount_generated,
        }
    }
}

/// Create Checkout Handler
///
/// Places an order, redeeming the discount code when one is given.
#[endpoint(
    tags("checkout"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid order or discount code"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<ReceiptResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let checkout: NewCheckout = json.into_inner().into();

    validate_checkout(&checkout).or_400()?;

    let receipt = state
        .ledger
        .checkout(checkout)
        .await
        .map_err(into_status_error)?;

    Ok(Json(receipt.into()))
}
