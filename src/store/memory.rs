//! In-memory store doubles.
//!
//! These model the external collection service's observable behavior (email
//! uniqueness, id assignment, token lookup) so the flows can be exercised
//! without a database. Used by `AppState::fake()` and the test suite.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::api_keys::{ApiKey, ApiKeyStore};
use crate::store::users::{NewUser, User, UserStore};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>, // keyed by email
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().expect("user store lock");
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, user: NewUser) -> AppResult<Uuid> {
        let mut users = self.users.lock().expect("user store lock");
        if users.contains_key(&user.email) {
            return Err(AppError::DuplicateUser);
        }
        let id = Uuid::new_v4();
        users.insert(
            user.email.clone(),
            User {
                id,
                name: user.name,
                email: user.email,
                password_hash: user.password_hash,
                is_admin: user.is_admin,
            },
        );
        Ok(id)
    }
}

#[derive(Default)]
pub struct MemoryApiKeyStore {
    keys: Mutex<HashMap<String, ApiKey>>,
}

impl MemoryApiKeyStore {
    /// Provision a key, as the external issuing process would.
    pub fn provision(&self, key: ApiKey) {
        let mut keys = self.keys.lock().expect("api key store lock");
        keys.insert(key.token.clone(), key);
    }
}

#[async_trait]
impl ApiKeyStore for MemoryApiKeyStore {
    async fn find_by_token(&self, token: &str) -> AppResult<Option<ApiKey>> {
        let keys = self.keys.lock().expect("api key store lock");
        Ok(keys.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "A".into(),
            email: email.into(),
            password_hash: "$2b$10$not-a-real-hash".into(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_email_round_trips() {
        let store = MemoryUserStore::default();
        let id = store
            .insert(NewUser {
                name: "A".into(),
                email: "a@x.com".into(),
                password_hash: "hash".into(),
                is_admin: false,
            })
            .await
            .expect("insert");

        let user = store
            .find_by_email("a@x.com")
            .await
            .expect("lookup")
            .expect("user present");
        assert_eq!(user.id, id);
        assert_eq!(user.name, "A");
        assert_eq!(user.email, "a@x.com");
        assert!(!user.is_admin);
    }

    #[tokio::test]
    async fn unknown_email_is_none() {
        let store = MemoryUserStore::default();
        let user = store.find_by_email("missing@x.com").await.expect("lookup");
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_by_the_store() {
        let store = MemoryUserStore::default();
        store.insert(new_user("a@x.com")).await.expect("first insert");
        let err = store.insert(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUser));
    }

    #[tokio::test]
    async fn provisioned_key_is_found_with_its_scopes() {
        let store = MemoryApiKeyStore::default();
        store.provision(ApiKey {
            token: "validtoken".into(),
            scopes: vec!["read".into(), "write".into()],
        });

        let key = store
            .find_by_token("validtoken")
            .await
            .expect("lookup")
            .expect("key present");
        assert_eq!(key.scopes, vec!["read".to_string(), "write".to_string()]);

        let missing = store.find_by_token("other").await.expect("lookup");
        assert!(missing.is_none());
    }
}
