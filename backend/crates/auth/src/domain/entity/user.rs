//! User Entity
//!
//! A registered account. The password hash never leaves the auth crate's
//! views; blog code only reads `user_id` and `user_name`.

use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::RawPassword,
    user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database row id
    pub user_id: UserId,
    /// Unique login name
    pub user_name: UserName,
    /// Argon2id hash of the password
    pub password_hash: UserPassword,
}

impl User {
    /// Check a login attempt against the stored hash
    pub fn verify_password(&self, raw: &RawPassword) -> bool {
        self.password_hash.verify(raw)
    }
}
