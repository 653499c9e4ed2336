//! Create Post Use Case

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_draft::PostDraft;
use crate::error::BlogResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
}

pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, author_id: UserId, input: CreatePostInput) -> BlogResult<PostId> {
        let draft = PostDraft::new(input.title, input.body)?;

        let post_id = self.post_repo.create(author_id, &draft, Utc::now()).await?;

        tracing::info!(
            post_id = %post_id,
            author_id = %author_id,
            "Post created"
        );

        Ok(post_id)
    }
}
