//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256 signing, Base64)
//! - Password hashing (Argon2id)
//! - Cookie management
//! - SQLite connection and schema bootstrap

pub mod cookie;
pub mod crypto;
pub mod database;
pub mod password;
