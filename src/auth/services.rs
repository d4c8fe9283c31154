use tracing::info;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::AppResult;
use crate::store::{NewUser, UserStore};

/// Register a new user: hash the password, insert the record, return the
/// store-assigned id.
///
/// No duplicate-email pre-check happens here — uniqueness is the credential
/// store's contract, and a violation surfaces as `AppError::DuplicateUser`.
pub async fn create_user(
    users: &dyn UserStore,
    name: &str,
    email: &str,
    password: &str,
    is_admin: bool,
) -> AppResult<Uuid> {
    let password_hash = hash_password(password)?;
    let id = users
        .insert(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            is_admin,
        })
        .await?;
    info!(user_id = %id, %email, "user created");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;
    use crate::error::AppError;
    use crate::store::memory::MemoryUserStore;

    #[tokio::test]
    async fn create_user_stores_a_verifiable_hash_not_the_password() {
        let users = MemoryUserStore::default();
        let id = create_user(&users, "A", "a@x.com", "p@ss1", false)
            .await
            .expect("create");

        let stored = users
            .find_by_email("a@x.com")
            .await
            .expect("lookup")
            .expect("user present");
        assert_eq!(stored.id, id);
        assert_ne!(stored.password_hash, "p@ss1");
        assert!(verify_password("p@ss1", &stored.password_hash).expect("verify"));
    }

    #[tokio::test]
    async fn second_create_with_same_email_is_duplicate() {
        let users = MemoryUserStore::default();
        create_user(&users, "A", "a@x.com", "one", false)
            .await
            .expect("create");
        let err = create_user(&users, "B", "a@x.com", "two", true)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateUser));
    }
}
