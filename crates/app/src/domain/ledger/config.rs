//! Discount configuration.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::domain::ledger::errors::ConfigError;

pub const DEFAULT_NTH_ORDER: u32 = 3;
pub const DEFAULT_PERCENTAGE: u8 = 10;

const MAX_PERCENTAGE: u8 = 100;

/// Process-wide reward settings: every `nth_order`-th order of a user earns a
/// code worth `percentage` percent off a later order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountConfig {
    nth_order: u32,
    percentage: u8,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountConfigUpdate {
    pub nth_order: Option<u32>,
    pub percentage: Option<u8>,
}

impl DiscountConfig {
    /// # Errors
    ///
    /// Returns an error when `nth_order` is zero or `percentage` exceeds 100.
    pub fn new(nth_order: u32, percentage: u8) -> Result<Self, ConfigError> {
        if nth_order == 0 {
            return Err(ConfigError::InvalidNthOrder);
        }

        if percentage > MAX_PERCENTAGE {
            return Err(ConfigError::InvalidPercentage(percentage));
        }

        Ok(Self {
            nth_order,
            percentage,
        })
    }

    pub fn nth_order(&self) -> u32 {
        self.nth_order
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Merge `update` into this config. Either both fields validate and the
    /// merged config is returned, or nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error when the merged config is invalid.
    pub fn merge(self, update: DiscountConfigUpdate) -> Result<Self, ConfigError> {
        Self::new(
            update.nth_order.unwrap_or(self.nth_order),
            update.percentage.unwrap_or(self.percentage),
        )
    }

    /// Whether a user's `order_count`-th order earns a new code.
    pub fn is_reward_order(&self, order_count: u64) -> bool {
        order_count % u64::from(self.nth_order) == 0
    }

    /// Orders remaining until the next reward. Equals `nth_order` right after
    /// a reward was issued.
    pub fn orders_until_reward(&self, order_count: u64) -> u32 {
        let remainder = order_count % u64::from(self.nth_order);

        u32::try_from(remainder).map_or(self.nth_order, |remainder| self.nth_order - remainder)
    }

    /// Discount on `subtotal` in minor units, rounded half away from zero.
    pub fn discount_on(&self, subtotal: u64) -> Option<u64> {
        Decimal::from(subtotal)
            .checked_mul(Decimal::from(self.percentage))?
            .checked_div(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
    }
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            nth_order: DEFAULT_NTH_ORDER,
            percentage: DEFAULT_PERCENTAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_to_every_third_order_at_ten_percent() {
        let config = DiscountConfig::default();

        assert_eq!(config.nth_order(), 3);
        assert_eq!(config.percentage(), 10);
    }

    #[test]
    fn rejects_zero_nth_order() {
        assert_eq!(
            DiscountConfig::new(0, 10),
            Err(ConfigError::InvalidNthOrder)
        );
    }

    #[test]
    fn rejects_percentage_above_one_hundred() {
        assert_eq!(
            DiscountConfig::new(3, 101),
            Err(ConfigError::InvalidPercentage(101))
        );
    }

    #[test]
    fn merge_only_changes_given_fields() -> TestResult {
        let config = DiscountConfig::default().merge(DiscountConfigUpdate {
            nth_order: None,
            percentage: Some(25),
        })?;

        assert_eq!(config, DiscountConfig::new(3, 25)?);

        Ok(())
    }

    #[test]
    fn merge_rejects_partially_invalid_update() {
        let result = DiscountConfig::default().merge(DiscountConfigUpdate {
            nth_order: Some(5),
            percentage: Some(150),
        });

        assert_eq!(result, Err(ConfigError::InvalidPercentage(150)));
    }

    #[test]
    fn reward_triggers_on_multiples_of_nth_order() -> TestResult {
        let config = DiscountConfig::new(3, 10)?;

        let rewards: Vec<u64> = (1..=9).filter(|n| config.is_reward_order(*n)).collect();

        assert_eq!(rewards, vec![3, 6, 9]);

        Ok(())
    }

    #[test]
    fn orders_until_reward_counts_down_and_resets() -> TestResult {
        let config = DiscountConfig::new(3, 10)?;

        let remaining: Vec<u32> = (1..=4).map(|n| config.orders_until_reward(n)).collect();

        assert_eq!(remaining, vec![2, 1, 3, 2]);

        Ok(())
    }

    #[test]
    fn discount_is_percentage_of_subtotal() -> TestResult {
        assert_eq!(DiscountConfig::new(3, 10)?.discount_on(200), Some(20));
        assert_eq!(DiscountConfig::new(3, 0)?.discount_on(200), Some(0));
        assert_eq!(DiscountConfig::new(3, 100)?.discount_on(200), Some(200));

        Ok(())
    }

    #[test]
    fn discount_rounds_half_away_from_zero() -> TestResult {
        // 15% of 10 = 1.5
        assert_eq!(DiscountConfig::new(3, 15)?.discount_on(10), Some(2));
        // 10% of 14 = 1.4
        assert_eq!(DiscountConfig::new(3, 10)?.discount_on(14), Some(1));

        Ok(())
    }
}
