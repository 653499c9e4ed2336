//! Update Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::application::get_post::GetPostUseCase;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_draft::PostDraft;
use crate::error::BlogResult;

/// Update post input
pub struct UpdatePostInput {
    pub title: String,
    pub body: String,
}

pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(
        &self,
        post_id: PostId,
        user_id: UserId,
        input: UpdatePostInput,
    ) -> BlogResult<()> {
        // Existence and ownership are checked before the form
        GetPostUseCase::new(self.post_repo.clone())
            .find_owned(post_id, user_id)
            .await?;

        let draft = PostDraft::new(input.title, input.body)?;
        self.post_repo.update(post_id, &draft).await?;

        tracing::info!(post_id = %post_id, user_id = %user_id, "Post updated");

        Ok(())
    }
}
