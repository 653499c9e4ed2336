//! HTTP Handlers
//!
//! Gated handlers take [`AuthenticatedUser`]; the router also wraps them in
//! `login_required`.

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use std::sync::Arc;

use auth::presentation::dto::{PageView, UserView};
use auth::{AuthenticatedUser, CurrentUser};

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;
use crate::presentation::dto::{EditView, IndexView, PostForm, PostView};
use crate::presentation::extract::PostIdPath;

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /
pub async fn index<R>(
    State(state): State<BlogAppState<R>>,
    CurrentUser(user): CurrentUser,
) -> BlogResult<Json<IndexView>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(IndexView {
        user: user.as_ref().map(UserView::from),
        posts: posts.into_iter().map(PostView::from).collect(),
    }))
}

/// GET /create
pub async fn create_page(AuthenticatedUser(user): AuthenticatedUser) -> Json<PageView> {
    Json(PageView::new("create", Some(&user)))
}

/// POST /create
pub async fn create<R>(
    State(state): State<BlogAppState<R>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Form(form): Form<PostForm>,
) -> BlogResult<Redirect>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    CreatePostUseCase::new(state.repo.clone())
        .execute(
            user.user_id,
            CreatePostInput {
                title: form.title,
                body: form.body,
            },
        )
        .await?;

    Ok(Redirect::to("/"))
}

/// GET /{id}/update
pub async fn update_page<R>(
    State(state): State<BlogAppState<R>>,
    AuthenticatedUser(user): AuthenticatedUser,
    PostIdPath(post_id): PostIdPath,
) -> BlogResult<Json<EditView>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let post = GetPostUseCase::new(state.repo.clone())
        .find_owned(post_id, user.user_id)
        .await?;

    Ok(Json(EditView {
        page: "update",
        user: UserView::from(&user),
        post: PostView::from(post),
    }))
}

/// POST /{id}/update
pub async fn update<R>(
    State(state): State<BlogAppState<R>>,
    AuthenticatedUser(user): AuthenticatedUser,
    PostIdPath(post_id): PostIdPath,
    Form(form): Form<PostForm>,
) -> BlogResult<Redirect>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    UpdatePostUseCase::new(state.repo.clone())
        .execute(
            post_id,
            user.user_id,
            UpdatePostInput {
                title: form.title,
                body: form.body,
            },
        )
        .await?;

    Ok(Redirect::to("/"))
}

/// POST /{id}/delete
pub async fn delete<R>(
    State(state): State<BlogAppState<R>>,
    AuthenticatedUser(user): AuthenticatedUser,
    PostIdPath(post_id): PostIdPath,
) -> BlogResult<Redirect>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    DeletePostUseCase::new(state.repo.clone())
        .execute(post_id, user.user_id)
        .await?;

    Ok(Redirect::to("/"))
}
