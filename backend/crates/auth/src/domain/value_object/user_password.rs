//! User Password Value Object
//!
//! Domain wrapper over `platform::password`, mapping its errors onto
//! `AuthError`.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Accept any non-empty password
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::Empty => AuthError::PasswordRequired,
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password as stored in `user.password`
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password with a fresh salt
    pub fn from_raw(raw: &RawPassword) -> AuthResult<Self> {
        let hashed = raw.inner().hash().map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AuthError::Internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AuthError::Internal("Unexpected error during password hashing".to_string())
            }
        })?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash (constant time)
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_required() {
        let err = RawPassword::new(String::new()).unwrap_err();
        assert!(matches!(err, AuthError::PasswordRequired));
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("pw1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();
        assert!(hashed.verify(&raw));

        let wrong = RawPassword::new("pw2".to_string()).unwrap();
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("pw1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();

        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw));
    }

    #[test]
    fn test_corrupt_hash_is_internal() {
        let err = UserPassword::from_phc_string("pw1").unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));
    }
}
