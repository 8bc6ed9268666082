//! Sales statistics.

use std::collections::VecDeque;

use crate::domain::{ledger::config::DiscountConfig, orders::records::OrderRecord};

/// Number of orders reported in [`Stats::recent_orders`].
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// Aggregate statistics over all persisted orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Units sold across all orders.
    pub total_items: u64,
    /// Revenue after discounts, in minor units.
    pub total_amount: u64,
    /// Discounts granted, in minor units.
    pub total_discount: u64,
    pub order_count: u64,
    /// Most recent orders, newest first.
    pub recent_orders: Vec<OrderRecord>,
    pub config: DiscountConfig,
}

impl Stats {
    /// Statistics with no orders.
    #[must_use]
    pub fn empty(config: DiscountConfig) -> Self {
        Self {
            total_items: 0,
            total_amount: 0,
            total_discount: 0,
            order_count: 0,
            recent_orders: Vec::new(),
            config,
        }
    }

    /// Fold a chronological order history into statistics.
    #[must_use]
    pub fn from_history(orders: &[OrderRecord], config: DiscountConfig) -> Self {
        let total_items = orders
            .iter()
            .fold(0_u64, |sum, order| sum.saturating_add(order.item_count()));

        let total_amount = orders
            .iter()
            .fold(0_u64, |sum, order| sum.saturating_add(order.total));

        let total_discount = orders
            .iter()
            .fold(0_u64, |sum, order| sum.saturating_add(order.discount));

        Self {
            total_items,
            total_amount,
            total_discount,
            order_count: u64::try_from(orders.len()).unwrap_or(u64::MAX),
            recent_orders: orders
                .iter()
                .rev()
                .take(RECENT_ORDERS_LIMIT)
                .cloned()
                .collect(),
            config,
        }
    }
}

/// Counters maintained as orders are placed, so statistics are available
/// without re-reading the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RunningTotals {
    total_items: u64,
    total_amount: u64,
    total_discount: u64,
    order_count: u64,
    recent: VecDeque<OrderRecord>,
}

impl RunningTotals {
    pub(crate) fn record(&mut self, order: &OrderRecord) {
        self.total_items = self.total_items.saturating_add(order.item_count());
        self.total_amount = self.total_amount.saturating_add(order.total);
        self.total_discount = self.total_discount.saturating_add(order.discount);
        self.order_count = self.order_count.saturating_add(1);

        self.recent.push_front(order.clone());
        self.recent.truncate(RECENT_ORDERS_LIMIT);
    }

    pub(crate) fn snapshot(&self, config: DiscountConfig) -> Stats {
        Stats {
            total_items: self.total_items,
            total_amount: self.total_amount,
            total_discount: self.total_discount,
            order_count: self.order_count,
            recent_orders: self.recent.iter().cloned().collect(),
            config,
        }
    }
}
