//! SQLite Connection and Schema Bootstrap
//!
//! Connections come from a small pool; a handler holds one only for the
//! duration of a query and it goes back to the pool when dropped, on both
//! success and error paths.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Static schema script. Drops and recreates every table.
pub const SCHEMA_SQL: &str = include_str!("../../../../database/schema.sql");

/// Default pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a pool on the database file at `path`, creating the file if missing
pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    tracing::debug!(path = %path.display(), "Opened SQLite pool");
    Ok(pool)
}

/// Clear the existing data and create new tables.
///
/// Destructive. Only the `init-db` command and tests call this.
pub async fn init_db(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    tracing::info!("Database schema (re)created");
    Ok(())
}
