use std::sync::Arc;

use axum::{
    response::{Html, IntoResponse, Response},
    routing::get,
    Extension, Form, Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::{found, ui};
use crate::credentials;
use crate::error::Error;
use crate::session::{self, SessionClaims};
use crate::userlog;
use crate::AppState;

const MISSING_FIELDS_ERROR: &str = "Please fill in all the required fields.";
const INVALID_LOGIN_ERROR: &str = "Invalid login details. Please try again.";

pub fn auth_routes() -> Router {
    Router::new()
        .route("/login", get(login_page).post(login_submit))
        .route("/logout", get(logout).post(logout))
}

async fn login_page() -> Html<String> {
    ui::render_login(None)
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    user_id: Option<String>,
    password: Option<String>,
}

/// Check the submitted credentials against the login details file.
///
/// Rejections re-render the form with an inline error at HTTP 200 rather
/// than redirecting. A successful login stores the user id in the session
/// cookie (keeping any previously chosen language), records the login in the
/// user's log file, and redirects to the index.
async fn login_submit(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, Error> {
    let user_id = form.user_id.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    if user_id.is_empty() || password.is_empty() {
        return Ok(ui::render_login(Some(MISSING_FIELDS_ERROR)).into_response());
    }

    if !credentials::authenticate(&state.config.credentials_path, &user_id, &password)? {
        tracing::warn!(user_id = %user_id, "rejected login attempt");
        return Ok(ui::render_login(Some(INVALID_LOGIN_ERROR)).into_response());
    }

    let mut claims =
        session::from_jar(&state.session_keys, &jar).unwrap_or_else(SessionClaims::new);
    claims.user_id = Some(user_id.clone());
    claims.touch();
    let cookie = session::cookie(state.session_keys.issue(&claims)?);

    userlog::record_login(&state.config.log_dir, &user_id).await?;
    tracing::info!(user_id = %user_id, "user logged in");

    Ok((jar.add(cookie), found("/")).into_response())
}

/// Drop the session cookie (a no-op when there is none) and return to the
/// login page.
async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(session::removal_cookie()), found("/login"))
}
