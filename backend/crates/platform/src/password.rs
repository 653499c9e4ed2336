//! Password Hashing and Verification
//!
//! - Argon2id hashing with a random per-password salt (PHC string output)
//! - Zeroization of the clear text on drop
//! - Constant-time verification (delegated to `argon2`)
//!
//! The only policy enforced here is "not empty"; registration accepts any
//! non-empty password.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password is required.")]
    Empty,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Accept any non-empty password; the bytes are hashed as given
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id with a fresh random salt
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        // OWASP recommended Argon2id parameters (crate defaults):
        // m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_empty() {
        let result = ClearTextPassword::new(String::new());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::Empty);
    }

    #[test]
    fn test_short_password_is_accepted() {
        assert!(ClearTextPassword::new("pw1".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("pw1".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(hashed.verify(&password));

        let wrong_password = ClearTextPassword::new("pw2".to_string()).unwrap();
        assert!(!hashed.verify(&wrong_password));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let password = ClearTextPassword::new("pw1".to_string()).unwrap();
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_fullwidth_lookalike_is_rejected() {
        let ascii = ClearTextPassword::new("pw1".to_string()).unwrap();
        let hashed = ascii.hash().unwrap();
        // U+FF50 U+FF57 U+FF11: fullwidth "pw1"
        let fullwidth = ClearTextPassword::new("\u{ff50}\u{ff57}\u{ff11}".to_string()).unwrap();
        assert!(!hashed.verify(&fullwidth));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string()).unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
