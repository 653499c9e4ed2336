//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let user_name =
            UserName::new(input.user_name).map_err(|_| AuthError::UsernameRequired)?;

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password)?;

        // The UNIQUE constraint decides; no pre-check
        let user_id = self.user_repo.create(&user_name, &password_hash).await?;

        tracing::info!(
            user_id = %user_id,
            user_name = %user_name,
            "User signed up"
        );

        Ok(SignUpOutput { user_id })
    }
}
