//! Argon2id password hashing for agency and customer accounts.

use std::sync::OnceLock;

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors raised while hashing or checking a password.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Stored hash is not a PHC string.
    #[error("invalid password hash format")]
    InvalidHash,
}

/// Hashes a password into a PHC string with a fresh random salt.
///
/// ```
/// use tourdesk_core::auth::hash_password;
///
/// let hash = hash_password("sunset-cruise").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Checks `password` against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; only malformed hashes and internal failures are errors.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

/// Burns one verification against a throwaway hash.
///
/// Login calls this when the email is unknown so both paths cost the same.
pub fn verify_against_dummy(password: &str) {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();

    if let Some(hash) = DUMMY.get_or_init(|| hash_password("tourdesk-dummy-password").ok()) {
        let _ = verify_password(password, hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_argon2id() {
        let hash = hash_password("harbour-tour").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("harbour-tour"));
    }

    #[test]
    fn test_verify_matches_only_original_password() {
        let hash = hash_password("harbour-tour").unwrap();

        assert!(verify_password("harbour-tour", &hash).unwrap());
        assert!(!verify_password("Harbour-tour", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        assert_ne!(
            hash_password("same").unwrap(),
            hash_password("same").unwrap()
        );
    }

    #[test]
    fn test_malformed_hash_is_rejected() {
        let result = verify_password("anything", "plaintext-not-a-hash");
        assert!(matches!(result, Err(PasswordError::InvalidHash)));
    }

    #[test]
    fn test_dummy_verification_does_not_panic() {
        verify_against_dummy("whatever");
        verify_against_dummy("whatever again");
    }
}
