//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Where unauthenticated visitors are sent
pub const LOGIN_PATH: &str = "/auth/login";

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username is required.")]
    UsernameRequired,

    #[error("Password is required.")]
    PasswordRequired,

    /// Unique constraint on `user.username` rejected the insert
    #[error("User {0} is already registered.")]
    UsernameTaken(String),

    /// Unknown user or wrong password; deliberately indistinguishable
    #[error("Incorrect username or password.")]
    InvalidCredentials,

    /// Session cookie malformed or signature mismatch
    #[error("Session is invalid")]
    SessionInvalid,

    /// Gated route reached without a logged-in user
    #[error("Login required")]
    LoginRequired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UsernameRequired | AuthError::PasswordRequired => StatusCode::BAD_REQUEST,
            AuthError::UsernameTaken(_) => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::LoginRequired => StatusCode::SEE_OTHER,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UsernameRequired | AuthError::PasswordRequired => ErrorKind::BadRequest,
            AuthError::UsernameTaken(_) => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::SessionInvalid
            | AuthError::LoginRequired => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures keep their details in the logs only.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            AuthError::LoginRequired => Redirect::to(LOGIN_PATH).into_response(),
            // Pool exhaustion and a locked file become 503
            AuthError::Database(e) => AppError::from(e).into_response(),
            _ => self.to_app_error().into_response(),
        }
    }
}
