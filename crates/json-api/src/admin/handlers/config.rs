//! Get Discount Config Handler

use salvo::prelude::*;

use crate::{admin::models::ConfigResponse, extensions::*};

/// Get Discount Config Handler
#[endpoint(tags("admin"), summary = "Get Discount Config")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ConfigResponse>, StatusError> {
    let state = depot.state_or_500()?;

    Ok(Json(state.ledger.config().await.into()))
}
