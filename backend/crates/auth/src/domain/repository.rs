//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return its id
    ///
    /// Fails with `AuthError::UsernameTaken` when the name is already stored.
    async fn create(&self, user_name: &UserName, password: &UserPassword) -> AuthResult<UserId>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}
