//! Credential hashing
//!
//! Passwords are never stored as entered. The hasher is injected into the
//! site so tests can use a cheap stand-in.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::site::SiteError;

pub trait CredentialHasher: Send + Sync {
    /// Produce the string stored in the user record.
    fn hash(&self, password: &str) -> Result<String, SiteError>;
    /// Check an entered password against a stored credential.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Argon2id with default parameters, stored as a PHC string.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, SiteError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| SiteError::CredentialHash)
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        // Legacy plain-text credentials don't parse and never verify
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Fast reversible hasher for tests.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct TestHasher;

    impl CredentialHasher for TestHasher {
        fn hash(&self, password: &str) -> Result<String, SiteError> {
            Ok(format!("test${}", password))
        }

        fn verify(&self, password: &str, stored: &str) -> bool {
            stored.strip_prefix("test$") == Some(password)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_round_trip() {
        let hasher = Argon2Hasher;
        let stored = hasher.hash("p").unwrap();
        assert_ne!(stored, "p");
        assert!(stored.starts_with("$argon2"));
        assert!(hasher.verify("p", &stored));
        assert!(!hasher.verify("q", &stored));
    }

    #[test]
    fn test_plain_text_credential_never_verifies() {
        assert!(!Argon2Hasher.verify("p", "p"));
    }
}
