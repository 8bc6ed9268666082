//! Ledger errors.

use thiserror::Error;
use tokio::task::JoinError;

use crate::store::StoreError;

/// Checkout failures. Apart from `Interrupted`, nothing is persisted and no
/// ledger state changes when any of these is returned.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The code was never issued to this user.
    #[error("Invalid discount code")]
    InvalidCode,

    /// The code was issued to this user and has already been redeemed.
    #[error("This discount code has already been used")]
    CodeAlreadyUsed,

    /// Line totals or the subtotal do not fit in the amount type.
    #[error("order amount is too large")]
    AmountOverflow,

    /// The order could not be persisted.
    #[error("failed to persist order")]
    Store(#[from] StoreError),

    /// The task placing the order panicked or was cancelled by runtime
    /// shutdown.
    #[error("checkout did not complete")]
    Interrupted(#[source] JoinError),
}

/// Rejected discount configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("nth order must be at least 1")]
    InvalidNthOrder,

    #[error("discount percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(u8),
}
