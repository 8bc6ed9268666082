//! Validate Discount Code Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::validation::{validate_discount_code, validate_user_id};

use crate::{checkout::into_status_error, extensions::*};

/// Validate Discount Code Handler
///
/// Responds `204 No Content` when the user could redeem the code right now.
#[endpoint(
    tags("users"),
    summary = "Validate Discount Code",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Code is redeemable"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid or used code"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<String>,
    code: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let user = user.into_inner();
    let code = code.into_inner();

    validate_user_id(&user).or_400()?;
    validate_discount_code(Some(&code)).or_400()?;

    state
        .ledger
        .validate_code(&user, &code)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use storefront_app::domain::ledger::{CheckoutError, MockLedgerService};

    use crate::test_helpers::ledger_service;

    use super::*;

    fn make_service(ledger: MockLedgerService) -> Service {
        ledger_service(
            ledger,
            Router::with_path("users/{user}/discount-codes/{code}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_redeemable_code_returns_204() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger
            .expect_validate_code()
            .once()
            .withf(|user, code| user == "abc" && code == "USERABC1")
            .return_once(|_, _| Ok(()));

        let res = TestClient::get("http://example.com/users/abc/discount-codes/USERABC1")
            .send(&make_service(ledger))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_code_returns_400() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger
            .expect_validate_code()
            .once()
            .return_once(|_, _| Err(CheckoutError::InvalidCode));

        let res = TestClient::get("http://example.com/users/abc/discount-codes/NOPE1")
            .send(&make_service(ledger))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_code_never_reaches_ledger() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger.expect_validate_code().never();

        let res = TestClient::get("http://example.com/users/abc/discount-codes/AB")
            .send(&make_service(ledger))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_short_user_id_never_reaches_ledger() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger.expect_validate_code().never();

        let res = TestClient::get("http://example.com/users/ab/discount-codes/USERABC1")
            .send(&make_service(ledger))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
