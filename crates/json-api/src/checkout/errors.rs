//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::ledger::CheckoutError;

pub(crate) fn into_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::InvalidCode
        | CheckoutError::CodeAlreadyUsed
        | CheckoutError::AmountOverflow => StatusError::bad_request().brief(error.to_string()),
        CheckoutError::Store(source) => {
            error!("failed to persist order: {source}");

            StatusError::internal_server_error()
        }
        CheckoutError::Interrupted(_) => StatusError::internal_server_error(),
    }
}
