//! Application factory

use std::sync::Arc;

use anyhow::Context;
use auth::{AuthMiddlewareState, SqliteAuthRepository, auth_router, load_logged_in_user};
use axum::{Router, middleware::from_fn_with_state, routing::get};
use blog::{SqliteBlogRepository, blog_router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Assemble every route over an existing pool
///
/// `load_logged_in_user` wraps all routes, so every handler can read the
/// current user.
pub fn build_router(pool: SqlitePool, config: &AppConfig) -> Router {
    let auth_config = Arc::new(config.auth_config());
    let user_repo = Arc::new(SqliteAuthRepository::new(pool.clone()));
    let post_repo = Arc::new(SqliteBlogRepository::new(pool));

    let session_state = AuthMiddlewareState {
        repo: user_repo.clone(),
        config: auth_config.clone(),
    };

    Router::new()
        .route("/hello", get(hello))
        .nest("/auth", auth_router(user_repo, auth_config))
        .merge(blog_router(post_repo))
        .layer(from_fn_with_state(
            session_state,
            load_logged_in_user::<SqliteAuthRepository>,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Build the application for `config`
///
/// Creates the instance directory if needed and opens the database pool.
/// Does not create tables; see [`init_database`].
pub async fn create_app(config: &AppConfig) -> anyhow::Result<Router> {
    let pool = open_pool(config).await?;

    if config.uses_default_secret() {
        tracing::warn!("Using the built-in development secret key; set QUILL_SECRET_KEY");
    }

    Ok(build_router(pool, config))
}

/// Drop and recreate all tables
pub async fn init_database(config: &AppConfig) -> anyhow::Result<()> {
    let pool = open_pool(config).await?;
    platform::database::init_db(&pool)
        .await
        .context("failed to apply schema")?;
    pool.close().await;
    Ok(())
}

/// Run the HTTP server until the process is stopped
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let app = create_app(&config).await?;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn open_pool(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    std::fs::create_dir_all(&config.instance_path).with_context(|| {
        format!(
            "failed to create instance directory {}",
            config.instance_path.display()
        )
    })?;

    let pool = platform::database::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.display()))?;

    tracing::info!(database = %config.database.display(), "Connected to database");
    Ok(pool)
}

/// GET /hello
async fn hello() -> &'static str {
    "Hello, World!"
}
