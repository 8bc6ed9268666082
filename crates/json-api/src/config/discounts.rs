//! Discount Config

use clap::Args;
use storefront_app::domain::ledger::{
    ConfigError,
    config::{DEFAULT_NTH_ORDER, DEFAULT_PERCENTAGE, DiscountConfig},
};

/// Discount settings applied at startup.
#[derive(Debug, Args)]
pub struct DiscountsConfig {
    /// Every nth order of a user earns a discount code
    #[arg(long, env = "DISCOUNT_NTH_ORDER", default_value_t = DEFAULT_NTH_ORDER)]
    pub nth_order: u32,

    /// Discount percentage granted by a code (0-100)
    #[arg(long, env = "DISCOUNT_PERCENTAGE", default_value_t = DEFAULT_PERCENTAGE)]
    pub percentage: u8,
}

impl DiscountsConfig {
    /// # Errors
    ///
    /// Returns an error when the settings are out of range.
    pub fn discount_config(&self) -> Result<DiscountConfig, ConfigError> {
        DiscountConfig::new(self.nth_order, self.percentage)
    }
}
