//! Auth Middleware
//!
//! `load_logged_in_user` runs on every request and stores a [`CurrentUser`]
//! in the request extensions. `login_required` wraps protected routes.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// The user attached to this request, if any
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<User>);

/// A request that passed the login gate
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Resolve the session cookie and attach the result to the request
///
/// Database failures abort the request with a 500.
pub async fn load_logged_in_user<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.current_user(token.as_deref()).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Redirect anonymous requests to the login page
pub async fn login_required(req: Request, next: Next) -> Response {
    let logged_in = req
        .extensions()
        .get::<CurrentUser>()
        .is_some_and(|current| current.0.is_some());

    if !logged_in {
        return AuthError::LoginRequired.into_response();
    }

    next.run(req).await
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default())
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .and_then(|current| current.0.clone())
            .map(AuthenticatedUser)
            .ok_or(AuthError::LoginRequired)
    }
}
