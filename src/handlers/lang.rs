use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::error::Error;
use crate::locales;
use crate::session::{self, SessionClaims};
use crate::AppState;

pub fn language_routes() -> Router {
    Router::new()
        .route("/change-language", post(change_language))
        .route("/get-locale", get(get_locale))
        .route("/get-languages", get(get_languages))
}

#[derive(Debug, Deserialize)]
struct ChangeLanguageRequest {
    language: Option<String>,
}

/// Store the chosen language in the session cookie. Locale resolution is
/// recomputed per request, so re-issuing the cookie is all the refresh the
/// translation context needs.
async fn change_language(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<ChangeLanguageRequest>,
) -> Result<Response, Error> {
    let mut claims =
        session::from_jar(&state.session_keys, &jar).unwrap_or_else(SessionClaims::new);
    claims.language = payload.language;
    claims.touch();
    let cookie = session::cookie(state.session_keys.issue(&claims)?);

    Ok((jar.add(cookie), StatusCode::NO_CONTENT).into_response())
}

/// The locale for the current request, as plain text.
async fn get_locale(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> String {
    let session_language =
        session::from_jar(&state.session_keys, &jar).and_then(|claims| claims.language);
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    locales::resolve(session_language.as_deref(), accept_language)
}

async fn get_languages() -> Json<Vec<&'static str>> {
    Json(locales::get_languages())
}
