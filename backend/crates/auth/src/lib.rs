//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - SQLite implementation
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Registration and login with username + password
//! - Signed cookie sessions carrying only the user id
//! - Per-request current-user loading and a `login_required` gate
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored in clear text
//! - Session cookie integrity protected by HMAC-SHA256 over the secret key
//! - Unknown user and wrong password produce the same error

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::user::User;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::middleware::{
    AuthMiddlewareState, AuthenticatedUser, CurrentUser, load_logged_in_user, login_required,
};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
