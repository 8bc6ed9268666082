//! Receipt

use crate::domain::orders::records::OrderRecord;

/// Result of a successful checkout: the persisted order enriched with the
/// user's reward status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub order: OrderRecord,
    /// Orders remaining until the next code is issued.
    pub next_discount_in: u32,
    /// The user's oldest unredeemed code, if any.
    pub available_discount_code: Option<String>,
    /// Percentage currently granted by a code.
    pub discount_percent: u8,
    /// Whether this checkout issued a new code.
    pub new_discount_generated: bool,
}
