use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Extension,
};
use axum_extra::extract::CookieJar;

use crate::handlers::found;
use crate::session::{self, SessionClaims};
use crate::AppState;

/// Guard for routes that require a logged-in user.
///
/// Reads the session cookie; without valid claims carrying a user id the
/// request is answered with a redirect to `/login` and the inner handler is
/// never invoked. With them, the claims are inserted into the request
/// extensions so handlers receive the session as an explicit
/// `Extension<SessionClaims>` instead of re-reading the cookie.
pub async fn session_gate(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match session::from_jar(&state.session_keys, &jar) {
        Some(claims @ SessionClaims { user_id: Some(_), .. }) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        _ => {
            tracing::debug!(path = %request.uri().path(), "unauthenticated request, redirecting to login");
            found("/login").into_response()
        }
    }
}
