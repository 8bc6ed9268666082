//! Products Data

use serde::{Deserialize, Serialize};

use crate::domain::products::records::ProductRecord;

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub price: u64,
}

impl From<NewProduct> for ProductRecord {
    fn from(product: NewProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
