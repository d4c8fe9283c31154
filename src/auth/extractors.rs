use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::AppError;

/// Basic-auth credentials presented at sign-in.
///
/// Parses `Authorization: Basic base64(email:password)`. This only parses;
/// the credential check against the store happens inside the sign-in flow.
/// Every parse failure rejects with the same collapsed 401 as a failed
/// credential check.
#[derive(Debug)]
pub struct BasicAuth {
    pub email: String,
    pub password: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for BasicAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Read Authorization header
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        // Expect "Basic <base64>"
        let encoded = auth
            .strip_prefix("Basic ")
            .or_else(|| auth.strip_prefix("basic "))
            .ok_or(AppError::Unauthorized)?;

        let decoded = STANDARD
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or(AppError::Unauthorized)?;

        // Email first; the password may itself contain ':'.
        let (email, password) = decoded.split_once(':').ok_or(AppError::Unauthorized)?;

        Ok(BasicAuth {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}
