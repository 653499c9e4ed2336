//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary shared by the auth and blog crates:
//! - Common error types and result aliases
//! - Typed row identifiers
//!
//! Anything framework specific lives behind the `sqlx` / `axum` features.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
