//! Test Helpers

use jiff::Timestamp;

use crate::domain::orders::{
    data::{CartItem, NewCheckout, NewOrder},
    records::{OrderItemRecord, OrderRecord, OrderUuid},
};

pub(crate) fn cart_item(id: &str, price: u64, quantity: u32) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: format!("Product {id}"),
        price,
        quantity,
    }
}

/// A single-item checkout for `user`.
pub(crate) fn checkout(user: &str, price: u64, code: Option<&str>) -> NewCheckout {
    NewCheckout {
        user_id: user.to_string(),
        items: vec![cart_item("p1", price, 1)],
        discount_code: code.map(str::to_string),
    }
}

/// An undiscounted single-item order ready for a store.
pub(crate) fn new_order(user: &str, subtotal: u64) -> NewOrder {
    NewOrder {
        user_id: user.to_string(),
        items: vec![cart_item("p1", subtotal, 1).into()],
        subtotal,
        discount: 0,
        total: subtotal,
        redeemed_code: None,
    }
}

pub(crate) fn order_record(user: &str, subtotal: u64, discount: u64, quantity: u32) -> OrderRecord {
    OrderRecord {
        id: OrderUuid::new(),
        user_id: user.to_string(),
        items: vec![OrderItemRecord {
            id: "p1".to_string(),
            name: "Product p1".to_string(),
            price: subtotal,
            quantity,
        }],
        subtotal,
        discount,
        total: subtotal - discount,
        redeemed_code: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
