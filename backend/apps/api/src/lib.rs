//! Quill: a small multi-user blog
//!
//! Wires the `auth` and `blog` crates onto one SQLite database and exposes
//! the application factory used by the binary and the integration tests.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_router, create_app, init_database, serve};
pub use config::{AppConfig, ConfigError};
