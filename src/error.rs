use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Convenience alias for fallible auth operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors. Flows surface these unchanged; the translation
/// to a transport status happens exactly once, in `into_response`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Sign-in was attempted without an `apiKeyToken` in the body.
    #[error("apiKeyToken is required")]
    MissingApiKeyToken,

    /// Collapsed sign-in failure: unknown email, wrong password and unknown
    /// API key all map here so callers cannot tell them apart.
    #[error("unauthorized")]
    Unauthorized,

    /// The credential store rejected an insert for an already-taken email.
    #[error("user already exists")]
    DuplicateUser,

    #[error("storage error: {0}")]
    Storage(sqlx::Error),

    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // Email uniqueness is enforced by the store, not pre-checked by the
        // registration flow; a constraint violation is the duplicate signal.
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::DuplicateUser;
            }
        }
        AppError::Storage(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingApiKeyToken => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::DuplicateUser => (StatusCode::CONFLICT, self.to_string()),
            AppError::Storage(e) => {
                error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::Hash(e) => {
                error!(error = %e, "password hash failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::Token(e) => {
                error!(error = %e, "session token failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
