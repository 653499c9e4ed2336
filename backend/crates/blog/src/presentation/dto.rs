//! API DTOs (Data Transfer Objects)

use auth::presentation::dto::UserView;
use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::post::Post;

/// Create/update form. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub author_id: UserId,
    pub username: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id,
            title: post.title,
            body: post.body,
            created: post.created,
            author_id: post.author_id,
            username: post.author_name,
        }
    }
}

/// GET /
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexView {
    pub user: Option<UserView>,
    pub posts: Vec<PostView>,
}

/// GET /{id}/update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditView {
    pub page: &'static str,
    pub user: UserView,
    pub post: PostView,
}
