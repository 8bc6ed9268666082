//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::warn;

/// Map rejected input to a bad request whose brief is the error message.
pub(crate) trait ResultExt<T> {
    fn or_400(self) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("rejected request: {error}");

            StatusError::bad_request().brief(error.to_string())
        })
    }
}
