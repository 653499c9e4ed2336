//! Blog Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::PostId;
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Post id {0} doesn't exist.")]
    PostNotFound(PostId),

    /// The `{id}` path segment is not a row id
    #[error("Post id {0} doesn't exist.")]
    MalformedPostId(String),

    /// Someone other than the author tried to modify the post
    #[error("You are not the author of post {0}.")]
    NotAuthor(PostId),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::TitleRequired => StatusCode::BAD_REQUEST,
            BlogError::PostNotFound(_) | BlogError::MalformedPostId(_) => StatusCode::NOT_FOUND,
            BlogError::NotAuthor(_) => StatusCode::FORBIDDEN,
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::TitleRequired => ErrorKind::BadRequest,
            BlogError::PostNotFound(_) | BlogError::MalformedPostId(_) => ErrorKind::NotFound,
            BlogError::NotAuthor(_) => ErrorKind::Forbidden,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            BlogError::Database(_) | BlogError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::NotAuthor(post_id) => {
                tracing::warn!(post_id = %post_id, "Rejected modification by non-author");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            BlogError::Database(e) => AppError::from(e).into_response(),
            _ => self.to_app_error().into_response(),
        }
    }
}
