//! Orders

pub mod data;
pub mod records;
