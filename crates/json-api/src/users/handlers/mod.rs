//! User Discount Code Handlers

pub(crate) mod discount_code;
pub(crate) mod validate_code;
