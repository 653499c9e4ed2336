//! Repository Traits

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::value_object::post_draft::PostDraft;
use crate::error::BlogResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// All posts, newest first (`created DESC, id DESC`)
    async fn list_recent(&self) -> BlogResult<Vec<Post>>;

    /// Find a post (with author name) by ID
    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<Post>>;

    /// Insert a post and return its id
    async fn create(
        &self,
        author_id: UserId,
        draft: &PostDraft,
        created: DateTime<Utc>,
    ) -> BlogResult<PostId>;

    /// Replace title and body
    async fn update(&self, post_id: PostId, draft: &PostDraft) -> BlogResult<()>;

    async fn delete(&self, post_id: PostId) -> BlogResult<()>;
}
