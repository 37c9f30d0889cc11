//! Signed session cookie.
//!
//! The session is client-carried state: an HS256-signed claims token stored
//! in an `HttpOnly` cookie. The server keeps nothing; a cookie that fails
//! signature or expiry validation is simply treated as "no session".

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const SESSION_COOKIE: &str = "session";

/// Sessions are re-issued on every login and language change.
const SESSION_TTL_HOURS: i64 = 24;

/// The session payload. At most a user id and a language preference; a
/// session can hold a language before anyone is logged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub exp: usize,
    pub iat: usize,
}

impl SessionClaims {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            user_id: None,
            language: None,
            exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp() as usize,
            iat: now.timestamp() as usize,
        }
    }

    /// Restart the session lifetime. Called whenever the cookie is re-issued.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.iat = now.timestamp() as usize;
        self.exp = (now + Duration::hours(SESSION_TTL_HOURS)).timestamp() as usize;
    }
}

impl Default for SessionClaims {
    fn default() -> Self {
        Self::new()
    }
}

/// Signing material derived from the configured session secret.
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, claims: &SessionClaims) -> Result<String, Error> {
        Ok(encode(&Header::default(), claims, &self.encoding)?)
    }

    /// Decode and validate a session token. Any failure (bad signature,
    /// expired, garbage) means no session.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .ok()
    }
}

/// Read the current session out of the request's cookie jar.
pub fn from_jar(keys: &SessionKeys, jar: &CookieJar) -> Option<SessionClaims> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| keys.verify(cookie.value()))
}

pub fn cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// A cookie matching `cookie()`'s name and path, for `CookieJar::remove`.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let keys = SessionKeys::new("test-secret");
        let mut claims = SessionClaims::new();
        claims.user_id = Some("alice".to_string());
        claims.language = Some("de".to_string());

        let token = keys.issue(&claims).unwrap();
        let decoded = keys.verify(&token).unwrap();
        assert_eq!(decoded.user_id.as_deref(), Some("alice"));
        assert_eq!(decoded.language.as_deref(), Some("de"));
    }

    #[test]
    fn empty_session_round_trips() {
        let keys = SessionKeys::new("test-secret");
        let token = keys.issue(&SessionClaims::new()).unwrap();
        let decoded = keys.verify(&token).unwrap();
        assert!(decoded.user_id.is_none());
        assert!(decoded.language.is_none());
    }

    #[test]
    fn rejects_tampered_token() {
        let keys = SessionKeys::new("test-secret");
        let mut claims = SessionClaims::new();
        claims.user_id = Some("alice".to_string());
        let mut token = keys.issue(&claims).unwrap();
        token.push('x');
        assert!(keys.verify(&token).is_none());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let keys = SessionKeys::new("test-secret");
        let other = SessionKeys::new("other-secret");
        let token = other.issue(&SessionClaims::new()).unwrap();
        assert!(keys.verify(&token).is_none());
    }

    #[test]
    fn rejects_expired_token() {
        let keys = SessionKeys::new("test-secret");
        let mut claims = SessionClaims::new();
        // Well past the default validation leeway.
        claims.exp = (Utc::now() - Duration::hours(2)).timestamp() as usize;
        let token = keys.issue(&claims).unwrap();
        assert!(keys.verify(&token).is_none());
    }
}
