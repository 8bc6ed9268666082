//! Available Discount Code Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::validation::validate_user_id;

use crate::extensions::*;

/// Discount Code Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountCodeResponse {
    /// The user's oldest unredeemed code
    pub code: Option<String>,
}

/// Available Discount Code Handler
#[endpoint(tags("users"), summary = "Get Available Discount Code")]
pub(crate) async fn handler(
    user: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DiscountCodeResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let user = user.into_inner();

    validate_user_id(&user).or_400()?;

    let code = state.ledger.available_code(&user).await;

    Ok(Json(DiscountCodeResponse { code }))
}
