//! Check Session Use Case
//!
//! Resolves the session cookie of a request to the logged-in user.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CheckSessionUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Load the user a session token points at
    ///
    /// No token, a bad signature, or an id with no row all mean "anonymous".
    /// Only database failures are errors.
    pub async fn current_user(&self, session_token: Option<&str>) -> AuthResult<Option<User>> {
        let Some(token) = session_token else {
            return Ok(None);
        };

        let user_id = match session_token::parse(&self.config.secret_key, token) {
            Ok(user_id) => user_id,
            Err(AuthError::SessionInvalid) => {
                tracing::debug!("Ignoring session cookie with bad signature");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let user = self.user_repo.find_by_id(user_id).await?;
        if user.is_none() {
            tracing::debug!(user_id = %user_id, "Session refers to a missing user");
        }

        Ok(user)
    }
}
