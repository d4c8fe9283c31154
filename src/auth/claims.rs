use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session-token payload. Signed at sign-in, never persisted.
///
/// `scopes` is copied from the API key record matched during sign-in, never
/// from client input; this is the only place scope grants enter a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,           // authenticated user ID
    pub name: String,        // display name
    pub email: String,       // login email
    pub scopes: Vec<String>, // grants from the matched API key
    pub iat: usize,          // issued at (unix timestamp)
    pub exp: usize,          // expires at (unix timestamp)
}
