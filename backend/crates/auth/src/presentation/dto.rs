//! API DTOs (Data Transfer Objects)

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Forms
// ============================================================================

/// Register form. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login form. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Views
// ============================================================================

/// Public projection of a user (no password hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: UserId,
    pub username: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            username: user.user_name.to_string(),
        }
    }
}

/// A form page: which page it is, and who is looking at it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub page: &'static str,
    pub user: Option<UserView>,
}

impl PageView {
    pub fn new(page: &'static str, user: Option<&User>) -> Self {
        Self {
            page,
            user: user.map(UserView::from),
        }
    }
}
