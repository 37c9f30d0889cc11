use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod conversation;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod locales;
pub mod middleware;
pub mod session;
pub mod userlog;

pub use error::Error;

use config::Config;
use session::SessionKeys;

/// Shared, read-only application state. Handlers receive it through an
/// `Extension` layer; nothing in it is mutated after startup.
pub struct AppState {
    pub config: Config,
    pub session_keys: SessionKeys,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session_keys = SessionKeys::new(&config.session_secret);
        Self {
            config,
            session_keys,
        }
    }
}

/// Assemble the full route table.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::ui::chat_routes())
        .merge(handlers::auth::auth_routes())
        .merge(handlers::lang::language_routes())
        .layer(axum::middleware::from_fn(middleware::logging::request_logging))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
