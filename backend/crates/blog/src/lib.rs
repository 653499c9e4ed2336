//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, draft value object, repository trait
//! - `application/` - Use cases
//! - `infra/` - SQLite implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Anyone may read the index. Writing requires a logged-in user, and only
//! a post's author may change or delete it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::entity::post::Post;
pub use error::{BlogError, BlogResult};
pub use infra::sqlite::SqliteBlogRepository;
pub use presentation::router::blog_router;
