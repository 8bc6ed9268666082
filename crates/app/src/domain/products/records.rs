//! Product Records

use serde::{Deserialize, Serialize};

/// Product Record
///
/// Catalog entries are created by seed data and never mutated by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    /// Unit price in minor units.
    pub price: u64,
}
