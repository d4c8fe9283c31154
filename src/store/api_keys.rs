use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;

/// A pre-provisioned API key and the scopes it grants. Keys are issued out
/// of band; this service only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApiKey {
    pub token: String, // lookup key, at most one record per token
    pub scopes: Vec<String>,
}

/// API key store: issued key tokens with their scope grants.
#[async_trait]
pub trait ApiKeyStore: Send + Sync {
    async fn find_by_token(&self, token: &str) -> AppResult<Option<ApiKey>>;
}

/// API key store backed by the external Postgres collection.
#[derive(Clone)]
pub struct PgApiKeyStore {
    db: PgPool,
}

impl PgApiKeyStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApiKeyStore for PgApiKeyStore {
    async fn find_by_token(&self, token: &str) -> AppResult<Option<ApiKey>> {
        let key = sqlx::query_as::<_, ApiKey>(
            r#"
            SELECT token, scopes
            FROM api_keys
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await?;
        Ok(key)
    }
}
