use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for sign-in. Credentials travel in the Authorization
/// header; the body carries only the API key token.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    // Absent and empty are both "missing" (a domain 401, not a schema
    // 422), so the field is optional at the serde level.
    #[serde(rename = "apiKeyToken", default)]
    pub api_key_token: Option<String>,
}

/// Request body for sign-up, shaped by the published schema.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Response returned after a successful sign-in.
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Creation acknowledgement returned by sign-up.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub data: Uuid,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_request_token_is_optional() {
        let req: SignInRequest = serde_json::from_str("{}").expect("empty body parses");
        assert!(req.api_key_token.is_none());

        let req: SignInRequest =
            serde_json::from_str(r#"{"apiKeyToken":"k-123"}"#).expect("body parses");
        assert_eq!(req.api_key_token.as_deref(), Some("k-123"));
    }

    #[test]
    fn sign_up_request_is_admin_defaults_to_false() {
        let req: SignUpRequest =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com","password":"secret"}"#)
                .expect("body parses");
        assert!(!req.is_admin);
    }

    #[test]
    fn sign_up_request_requires_password() {
        let parsed = serde_json::from_str::<SignUpRequest>(r#"{"name":"A","email":"a@x.com"}"#);
        assert!(parsed.is_err());
    }
}
