//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::application::get_post::GetPostUseCase;
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;

pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: PostId, user_id: UserId) -> BlogResult<()> {
        GetPostUseCase::new(self.post_repo.clone())
            .find_owned(post_id, user_id)
            .await?;

        self.post_repo.delete(post_id).await?;

        tracing::info!(post_id = %post_id, user_id = %user_id, "Post deleted");

        Ok(())
    }
}
