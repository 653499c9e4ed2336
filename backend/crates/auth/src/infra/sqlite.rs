//! SQLite Repository Implementation

use sqlx::SqlitePool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row type
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_name = UserName::new(self.username)
            .map_err(|_| AuthError::Internal("Empty username in database".to_string()))?;

        Ok(User {
            user_id: UserId::from_raw(self.id),
            user_name,
            password_hash: UserPassword::from_phc_string(self.password)?,
        })
    }
}

// ============================================================================
// UserRepository
// ============================================================================

impl UserRepository for SqliteAuthRepository {
    async fn create(&self, user_name: &UserName, password: &UserPassword) -> AuthResult<UserId> {
        let result = sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
            .bind(user_name.as_str())
            .bind(password.as_phc_string())
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(UserId::from_raw(done.last_insert_rowid())),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::UsernameTaken(user_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password FROM user WHERE id = ?",
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password FROM user WHERE username = ?",
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }
}
