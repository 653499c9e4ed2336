//! Session Token
//!
//! The session cookie value is `<user_id>.<base64url(HMAC-SHA256(secret, user_id))>`.
//! It carries nothing but the user id.

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Sign a user id into a cookie value
pub fn issue(secret_key: &[u8], user_id: UserId) -> String {
    let payload = user_id.to_string();
    let signature = hmac_sha256(secret_key, payload.as_bytes());
    format!("{}.{}", payload, to_base64_url(&signature))
}

/// Verify a cookie value and recover the user id
pub fn parse(secret_key: &[u8], token: &str) -> AuthResult<UserId> {
    let (payload, signature_b64) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;

    let signature = from_base64_url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;
    if !verify_hmac_sha256(secret_key, payload.as_bytes(), &signature) {
        return Err(AuthError::SessionInvalid);
    }

    payload.parse().map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"dev";

    #[test]
    fn test_issue_then_parse() {
        let token = issue(KEY, UserId::from_raw(42));
        assert!(token.starts_with("42."));
        assert_eq!(parse(KEY, &token).unwrap(), UserId::from_raw(42));
    }

    #[test]
    fn test_tampered_id_rejected() {
        let token = issue(KEY, UserId::from_raw(1));
        let forged = token.replacen("1.", "2.", 1);
        assert!(matches!(parse(KEY, &forged), Err(AuthError::SessionInvalid)));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = issue(b"other", UserId::from_raw(1));
        assert!(parse(KEY, &token).is_err());
    }

    #[test]
    fn test_malformed_rejected() {
        assert!(parse(KEY, "").is_err());
        assert!(parse(KEY, "1").is_err());
        assert!(parse(KEY, "1.!!!").is_err());
        assert!(parse(KEY, "abc.").is_err());
    }
}
