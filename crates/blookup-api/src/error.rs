use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blookup::synset::{KbError, ParseError};
use thiserror::Error;

/// Request-level error taxonomy, mapped onto explicit HTTP statuses.
///
/// Malformed path parameters are a client error; an unknown node or an
/// empty lookup result is a 404 rather than a fallthrough to another route.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("upstream lookup timed out")]
    Timeout,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl From<KbError> for ApiError {
    fn from(err: KbError) -> Self {
        match err {
            KbError::NotFound(what) => ApiError::NotFound(what),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
