use crate::error::AppResult;

/// bcrypt cost factor (fixed work factor for every stored digest).
const BCRYPT_COST: u32 = 10;

pub fn hash_password(plain: &str) -> AppResult<String> {
    Ok(bcrypt::hash(plain, BCRYPT_COST)?)
}

pub fn verify_password(plain: &str, hash: &str) -> AppResult<bool> {
    Ok(bcrypt::verify(plain, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "p@ss1";
        let hash = hash_password(password).expect("hashing should succeed");
        // One-way: the stored digest must never equal the plaintext.
        assert_ne!(hash, password);
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
