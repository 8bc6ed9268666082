//! Discount Ledger
//!
//! Per-user order counting, nth-order discount code issuance and one-time
//! redemption, plus running sales statistics.

pub mod codes;
pub mod config;
pub mod errors;
pub mod receipt;
pub mod service;
mod state;
pub mod stats;

pub use errors::{CheckoutError, ConfigError};
pub use service::*;
