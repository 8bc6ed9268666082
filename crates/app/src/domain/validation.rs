//! Checkout input validation.
//!
//! Pure shape checks run before the ledger sees a checkout. Whether a code
//! actually belongs to the user is the ledger's concern, not this module's.

use thiserror::Error;

use crate::domain::orders::data::{CartItem, NewCheckout};

pub const MIN_USER_ID_LEN: usize = 3;
pub const MIN_DISCOUNT_CODE_LEN: usize = 4;
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// Which validation rule a checkout broke.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("User ID must be at least 3 characters")]
    UserIdTooShort,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid item data")]
    InvalidItem,

    #[error("Quantity must be between 1 and 10")]
    QuantityOutOfRange,

    #[error("Invalid discount code format")]
    DiscountCodeFormat,
}

/// # Errors
///
/// Returns an error when the trimmed user id is shorter than three characters.
pub fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.trim().chars().count() < MIN_USER_ID_LEN {
        return Err(ValidationError::UserIdTooShort);
    }

    Ok(())
}

/// # Errors
///
/// Returns an error for an empty cart, an item without id, name or positive
/// price, or a quantity outside `1..=10`.
pub fn validate_items(items: &[CartItem]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    for item in items {
        if item.id.is_empty() || item.name.is_empty() || item.price == 0 {
            return Err(ValidationError::InvalidItem);
        }

        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&item.quantity) {
            return Err(ValidationError::QuantityOutOfRange);
        }
    }

    Ok(())
}

/// Format check only; an absent code is always valid.
///
/// # Errors
///
/// Returns an error when the code is shorter than four characters.
pub fn validate_discount_code(code: Option<&str>) -> Result<(), ValidationError> {
    match code {
        Some(code) if code.chars().count() < MIN_DISCOUNT_CODE_LEN => {
            Err(ValidationError::DiscountCodeFormat)
        }
        _ => Ok(()),
    }
}

/// Run every check in order: user id, items, then discount code.
///
/// # Errors
///
/// Returns the first rule that fails.
pub fn validate_checkout(checkout: &NewCheckout) -> Result<(), ValidationError> {
    validate_user_id(&checkout.user_id)?;
    validate_items(&checkout.items)?;
    validate_discount_code(checkout.discount_code.as_deref())
}
