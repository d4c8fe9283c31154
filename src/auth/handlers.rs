use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{CreatedResponse, PublicUser, SignInRequest, SignInResponse, SignUpRequest},
        extractors::BasicAuth,
        password::verify_password,
        services,
        session::SessionKeys,
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-up", post(sign_up))
}

/// POST /sign-in: exchange email/password plus a pre-issued API key token
/// for a short-lived session token.
///
/// The checks run in a fixed order: token presence, user lookup, password
/// comparison, key lookup. Every failure past the presence gate collapses
/// to the same 401 so a caller cannot tell which step rejected them; the
/// distinction only reaches the logs.
#[instrument(skip(state, credentials, body))]
pub async fn sign_in(
    State(state): State<AppState>,
    credentials: BasicAuth,
    Json(body): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, AppError> {
    let api_key_token = match body.api_key_token.as_deref() {
        Some(token) if !token.is_empty() => token,
        _ => return Err(AppError::MissingApiKeyToken),
    };

    let user = match state.users.find_by_email(&credentials.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(email = %credentials.email, "sign-in with unknown email");
            return Err(AppError::Unauthorized);
        }
        Err(error) => {
            error!(%error, "user lookup failed during sign-in");
            return Err(AppError::Unauthorized);
        }
    };

    match verify_password(&credentials.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            warn!(user_id = %user.id, "sign-in with wrong password");
            return Err(AppError::Unauthorized);
        }
        Err(error) => {
            error!(user_id = %user.id, %error, "stored hash rejected by verifier");
            return Err(AppError::Unauthorized);
        }
    }

    let api_key = match state.api_keys.find_by_token(api_key_token).await {
        Ok(Some(key)) => key,
        Ok(None) => {
            warn!(user_id = %user.id, "sign-in with unknown API key token");
            return Err(AppError::Unauthorized);
        }
        Err(error) => {
            error!(%error, "API key lookup failed during sign-in");
            return Err(AppError::Unauthorized);
        }
    };

    // Session scopes come from the matched key record, never from the body.
    let keys = SessionKeys::from_ref(&state);
    let token = keys.sign(&user, api_key.scopes)?;

    info!(user_id = %user.id, email = %user.email, "user signed in");
    Ok(Json(SignInResponse {
        token,
        user: PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
        },
    }))
}

/// POST /sign-up: register a new user.
///
/// The `Json` extractor is the schema gate; a body with missing fields or
/// malformed JSON is rejected before this handler runs.
#[instrument(skip(state, payload))]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = services::create_user(
        state.users.as_ref(),
        &payload.name,
        &payload.email,
        &payload.password,
        payload.is_admin,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            data: id,
            message: "User created succesfully".to_string(),
        }),
    ))
}
