//! Storefront Domain Concerns

pub mod ledger;
pub mod orders;
pub mod products;
pub mod validation;
