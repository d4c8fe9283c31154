use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppResult;

/// User record in the credential store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String, // unique lookup key
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt digest, never exposed in JSON
    pub is_admin: bool,
}

/// Insert payload for the credential store. Carries the already-hashed
/// password; the raw one never reaches the store layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Credential store: user records keyed by email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a user up by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new record, returning the store-assigned id. Email
    /// uniqueness is enforced by the store itself; a taken email surfaces
    /// as `AppError::DuplicateUser`.
    async fn insert(&self, user: NewUser) -> AppResult<Uuid>;
}

/// Credential store backed by the external Postgres collection.
#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> AppResult<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (name, email, password_hash, is_admin)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .fetch_one(&self.db)
        .await?;
        Ok(id)
    }
}
