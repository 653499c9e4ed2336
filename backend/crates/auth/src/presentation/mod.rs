//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{
    AuthMiddlewareState, AuthenticatedUser, CurrentUser, load_logged_in_user, login_required,
};
pub use router::auth_router;
