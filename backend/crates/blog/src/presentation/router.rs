//! Blog Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::login_required;

use crate::domain::repository::PostRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router, mounted at the site root
///
/// Expects `auth::load_logged_in_user` to run as an outer layer.
pub fn blog_router<R>(repo: Arc<R>) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState { repo };

    let protected = Router::new()
        .route(
            "/create",
            get(handlers::create_page).post(handlers::create::<R>),
        )
        .route(
            "/{id}/update",
            get(handlers::update_page::<R>).post(handlers::update::<R>),
        )
        .route("/{id}/delete", post(handlers::delete::<R>))
        .route_layer(middleware::from_fn(login_required));

    Router::new()
        .route("/", get(handlers::index::<R>))
        .merge(protected)
        .with_state(state)
}
