use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::auth::claims::Claims;
use crate::error::AppResult;
use crate::state::AppState;
use crate::store::User;

/// Session token lifetime: fixed 15 minutes from issuance. Expiry is
/// enforced by the verifier on later requests, not by the sign-in flow.
const SESSION_TTL: Duration = Duration::minutes(15);

/// HS256 signing and verification keys derived from the server-held secret.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.config.auth_jwt_secret.as_bytes())
    }
}

impl SessionKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Sign a session token for an authenticated user plus the scopes
    /// granted by the API key matched at sign-in.
    pub fn sign(&self, user: &User, scopes: Vec<String>) -> AppResult<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + SESSION_TTL;
        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            scopes,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user.id, "session token signed");
        Ok(token)
    }

    /// Verify a session token (signature and expiry), returning its claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}
