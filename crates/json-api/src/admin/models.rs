//! Admin Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::ledger::{
    config::{DiscountConfig, DiscountConfigUpdate},
    stats::Stats,
};

use crate::orders::OrderResponse;

/// Discount Config Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    /// Every nth order of a user earns a discount code
    pub nth_order: u32,

    /// Percentage granted by a discount code
    pub percentage: u8,
}

impl From<DiscountConfig> for ConfigResponse {
    fn from(config: DiscountConfig) -> Self {
        Self {
            nth_order: config.nth_order(),
            percentage: config.percentage(),
        }
    }
}

/// Update Discount Config Request
///
/// Omitted fields keep their current value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateConfigRequest {
    #[serde(default)]
    pub nth_order: Option<u32>,

    #[serde(default)]
    pub percentage: Option<u8>,
}

impl From<UpdateConfigRequest> for DiscountConfigUpdate {
    fn from(request: UpdateConfigRequest) -> Self {
        Self {
            nth_order: request.nth_order,
            percentage: request.percentage,
        }
    }
}

/// Stats Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsResponse {
    /// Units sold
    pub total_items: u64,

    /// Revenue after discounts, in minor units
    pub total_amount: u64,

    /// Discounts granted, in minor units
    pub total_discount: u64,

    pub order_count: u64,

    /// Up to five most recent orders, newest first
    pub recent_orders: Vec<OrderResponse>,

    pub config: ConfigResponse,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            total_items: stats.total_items,
            total_amount: stats.total_amount,
            total_discount: stats.total_discount,
            order_count: stats.order_count,
            recent_orders: stats.recent_orders.into_iter().map(Into::into).collect(),
            config: stats.config.into(),
        }
    }
}
