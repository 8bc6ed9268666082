//! Storefront application domain and persistence modules.
//!
//! The interesting part lives in [`domain::ledger`]: per-user order counting,
//! issuing a one-time discount code every nth order, redeeming codes exactly
//! once, and keeping running sales statistics. Everything persists through the
//! [`store::Store`] collaborator, which has JSON file, Postgres and in-memory
//! backends.

pub mod context;
pub mod database;
pub mod domain;
pub mod store;
pub mod uuids;

#[cfg(test)]
mod test;
