//! Admin

mod handlers;
mod models;

pub(crate) use handlers::*;
