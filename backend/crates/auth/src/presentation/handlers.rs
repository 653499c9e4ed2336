//! HTTP Handlers

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthResult, LOGIN_PATH};
use crate::presentation::dto::{LoginForm, PageView, RegisterForm};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// GET /auth/register
pub async fn register_page(CurrentUser(user): CurrentUser) -> Json<PageView> {
    Json(PageView::new("register", user.as_ref()))
}

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> AuthResult<Redirect>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    use_case
        .execute(SignUpInput {
            user_name: form.username,
            password: form.password,
        })
        .await?;

    Ok(Redirect::to(LOGIN_PATH))
}

// ============================================================================
// Login
// ============================================================================

/// GET /auth/login
pub async fn login_page(CurrentUser(user): CurrentUser) -> Json<PageView> {
    Json(PageView::new("login", user.as_ref()))
}

/// POST /auth/login
///
/// A fresh cookie replaces whatever session the client had.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            user_name: form.username,
            password: form.password,
        })
        .await?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token);

    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user): CurrentUser,
) -> impl IntoResponse
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    if let Some(user) = user {
        tracing::info!(user_id = %user.user_id, "User signed out");
    }

    let cookie = state.config.cookie_config().build_delete_cookie();

    ([(header::SET_COOKIE, cookie)], Redirect::to("/"))
}
