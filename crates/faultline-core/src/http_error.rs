use http::StatusCode;

use crate::error::KindError;

/// Trait for errors that can be converted to HTTP responses
///
/// A request-handling layer uses this to pick the response status and the
/// text it is allowed to show, keeping error kinds decoupled from any web
/// framework.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `not_found_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to end users
    fn client_message(&self) -> String;
}

impl HttpError for KindError {
    /// Falls back to 500 when `status` is missing or not a valid code
    fn status_code(&self) -> StatusCode {
        self.status()
            .and_then(|status| StatusCode::from_u16(status).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_type(&self) -> &str {
        self.kind().error_type()
    }

    fn client_message(&self) -> String {
        self.user_message().to_owned()
    }
}
