use axum::http::{header, HeaderName, StatusCode};

pub mod auth;
pub mod lang;
pub mod ui;

/// A plain 302 redirect. `axum::response::Redirect` only offers 303/307/308;
/// the whole surface here redirects with 302.
pub fn found(location: &str) -> (StatusCode, [(HeaderName, String); 1]) {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
}
