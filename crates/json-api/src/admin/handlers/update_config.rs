//! Update Discount Config Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    admin::models::{ConfigResponse, UpdateConfigRequest},
    extensions::*,
};

/// Update Discount Config Handler
///
/// Applies to later checkouts only; codes already issued keep their value.
#[endpoint(
    tags("admin"),
    summary = "Update Discount Config",
    responses(
        (status_code = StatusCode::OK, description = "Config updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Config out of range"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateConfigRequest>,
    depot: &mut Depot,
) -> Result<Json<ConfigResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let config = state
        .ledger
        .update_config(json.into_inner().into())
        .await
        .or_400()?;

    Ok(Json(config.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::ledger::{
        ConfigError, MockLedgerService,
        config::{DiscountConfig, DiscountConfigUpdate},
    };

    use crate::test_helpers::ledger_service;

    use super::*;

    fn make_service(ledger: MockLedgerService) -> Service {
        ledger_service(ledger, Router::with_path("admin/config").post(handler))
    }

    #[tokio::test]
    async fn test_partial_update_is_forwarded() -> TestResult {
        let mut ledger = MockLedgerService::new();
        let updated = DiscountConfig::new(3, 15)?;

        ledger
            .expect_update_config()
            .once()
            .withf(|update| {
                *update
                    == DiscountConfigUpdate {
                        nth_order: None,
                        percentage: Some(15),
                    }
            })
            .return_once(move |_| Ok(updated));

        let response: ConfigResponse = TestClient::post("http://example.com/admin/config")
            .json(&json!({ "percentage": 15 }))
            .send(&make_service(ledger))
            .await
            .take_json()
            .await?;

        assert_eq!(response.nth_order, 3);
        assert_eq!(response.percentage, 15);

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_config_returns_400() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger
            .expect_update_config()
            .once()
            .return_once(|_| Err(ConfigError::InvalidNthOrder));

        let res = TestClient::post("http://example.com/admin/config")
            .json(&json!({ "nthOrder": 0 }))
            .send(&make_service(ledger))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
