//! In-memory ledger state.

use jiff::Timestamp;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::info;

use crate::domain::{
    ledger::{
        codes::generate_code, config::DiscountConfig, errors::CheckoutError, receipt::Receipt,
        stats::RunningTotals,
    },
    orders::{
        data::{NewCheckout, NewOrder},
        records::{OrderItemRecord, OrderRecord},
    },
};

/// Discount bookkeeping for a single user.
///
/// A code is in exactly one of `available` or `used` once issued, and never
/// moves back from `used`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UserLedger {
    order_count: u64,
    // Oldest first.
    available: Vec<String>,
    used: FxHashSet<String>,
}

impl UserLedger {
    #[cfg(test)]
    pub(crate) fn order_count(&self) -> u64 {
        self.order_count
    }

    #[cfg(test)]
    pub(crate) fn available_codes(&self) -> &[String] {
        &self.available
    }

    pub(crate) fn first_available(&self) -> Option<&str> {
        self.available.first().map(String::as_str)
    }

    pub(crate) fn check_code(&self, code: &str) -> Result<(), CheckoutError> {
        if self.used.contains(code) {
            return Err(CheckoutError::CodeAlreadyUsed);
        }

        if !self.available.iter().any(|available| available == code) {
            return Err(CheckoutError::InvalidCode);
        }

        Ok(())
    }

    fn owns(&self, code: &str) -> bool {
        self.used.contains(code) || self.available.iter().any(|available| available == code)
    }

    fn redeem(&mut self, code: &str) {
        self.available.retain(|available| available != code);
        self.used.insert(code.to_string());
    }

    fn issue(&mut self, user_id: &str) -> String {
        let mut rng = rand::thread_rng();

        loop {
            let code = generate_code(user_id, Timestamp::now(), &mut rng);

            if !self.owns(&code) {
                self.available.push(code.clone());

                return code;
            }
        }
    }
}

/// Everything the ledger owns: config, per-user state and running totals.
#[derive(Debug, Default)]
pub(crate) struct LedgerState {
    config: DiscountConfig,
    users: FxHashMap<String, UserLedger>,
    totals: RunningTotals,
}

impl LedgerState {
    pub(crate) fn new(config: DiscountConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Rebuild order counts and running totals from a chronological history.
    /// Previously issued codes are not part of the history and stay lost.
    pub(crate) fn replay(config: DiscountConfig, orders: &[OrderRecord]) -> Self {
        let mut state = Self::new(config);

        for order in orders {
            let user = state.user_mut(&order.user_id);

            user.order_count = user.order_count.saturating_add(1);

            state.totals.record(order);
        }

        state
    }

    pub(crate) fn config(&self) -> DiscountConfig {
        self.config
    }

    pub(crate) fn set_config(&mut self, config: DiscountConfig) {
        self.config = config;
    }

    pub(crate) fn totals(&self) -> &RunningTotals {
        &self.totals
    }

    pub(crate) fn user_count(&self) -> usize {
        self.users.len()
    }

    pub(crate) fn user(&self, user_id: &str) -> Option<&UserLedger> {
        self.users.get(user_id)
    }

    /// Whether `user_id` could redeem `code` right now. Unknown users own no
    /// codes.
    pub(crate) fn check_code(&self, user_id: &str, code: &str) -> Result<(), CheckoutError> {
        self.user(user_id)
            .ok_or(CheckoutError::InvalidCode)?
            .check_code(code)
    }

    /// The user's ledger, created empty on first reference.
    pub(crate) fn user_mut(&mut self, user_id: &str) -> &mut UserLedger {
        self.users.entry(user_id.to_string()).or_default()
    }

    /// Price a checkout and check its code without changing any state.
    pub(crate) fn price(&self, checkout: NewCheckout) -> Result<NewOrder, CheckoutError> {
        let items: Vec<OrderItemRecord> = checkout.items.into_iter().map(Into::into).collect();

        let subtotal = items.iter().try_fold(0_u64, |sum, item| {
            item.line_total()
                .and_then(|line| sum.checked_add(line))
                .ok_or(CheckoutError::AmountOverflow)
        })?;

        let discount = match &checkout.discount_code {
            Some(code) => {
                self.check_code(&checkout.user_id, code)?;

                self.config
                    .discount_on(subtotal)
                    .ok_or(CheckoutError::AmountOverflow)?
            }
            None => 0,
        };

        let total = subtotal
            .checked_sub(discount)
            .ok_or(CheckoutError::AmountOverflow)?;

        Ok(NewOrder {
            user_id: checkout.user_id,
            items,
            subtotal,
            discount,
            total,
            redeemed_code: checkout.discount_code,
        })
    }

    /// Apply a persisted order: redeem its code, count it, maybe issue a new
    /// code, and update the running totals.
    pub(crate) fn commit(&mut self, order: OrderRecord) -> Receipt {
        let config = self.config;
        let user = self.user_mut(&order.user_id);

        if let Some(code) = &order.redeemed_code {
            user.redeem(code);
        }

        user.order_count = user.order_count.saturating_add(1);

        let order_count = user.order_count;
        let new_discount_generated = config.is_reward_order(order_count);

        if new_discount_generated {
            let code = user.issue(&order.user_id);

            info!(user_id = %order.user_id, order_count, code = %code, "discount code issued");
        }

        let available_discount_code = user.first_available().map(ToString::to_string);

        self.totals.record(&order);

        Receipt {
            order,
            next_discount_in: config.orders_until_reward(order_count),
            available_discount_code,
            discount_percent: config.percentage(),
            new_discount_generated,
        }
    }
}
