//! User Name Value Object
//!
//! ユーザー名はログインと画面表示に使う公開識別子。
//!
//! ## 不変条件
//! - 空文字列は不可
//! - 入力はそのまま保持する（正規化・小文字化なし）
//! - 一意性は `user.username` の UNIQUE 制約で保証する

use serde::Serialize;
use std::fmt;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty
    Empty,
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username is required."),
        }
    }
}

impl std::error::Error for UserNameError {}

/// Non-empty user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let input = input.into();
        if input.is_empty() {
            return Err(UserNameError::Empty);
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}
