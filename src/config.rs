use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment once at startup.
/// `dotenvy::dotenv()` is called by the binary before `load`, so a local
/// `.env` file works the same as real environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Prefix the chat page uses when building backend URLs.
    pub url_prefix: String,
    pub credentials_path: PathBuf,
    pub log_dir: PathBuf,
    pub session_secret: String,
}

impl Config {
    pub fn load() -> Self {
        let session_secret = env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set, sessions are signed with the default secret");
            "default_secret".to_string()
        });

        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
            url_prefix: env_or("URL_PREFIX", ""),
            credentials_path: env_or("LOGIN_DETAILS_PATH", "login_details.txt").into(),
            log_dir: env_or("LOG_DIR", "log").into(),
            session_secret,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
