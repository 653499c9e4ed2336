//! Auth Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router, to be nested under `/auth`
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register::<R>),
        )
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login::<R>),
        )
        .route("/logout", get(handlers::logout::<R>))
        .with_state(state)
}
