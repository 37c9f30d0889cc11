use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that escape a handler. Everything that is recoverable (missing
/// form fields, bad credentials, hyphen-less chat ids, missing sessions)
/// is handled in place and never reaches this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed credential line {line} in {path}")]
    MalformedCredentials { path: String, line: usize },

    #[error("session token error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
