//! User ID Value Object
//!
//! `user.id` is an SQLite `INTEGER PRIMARY KEY`; the typed wrapper lives in
//! `kernel` so the blog crate can name post authors without depending on auth.

pub use kernel::id::UserId;
