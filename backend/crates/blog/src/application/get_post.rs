//! Get Post Use Case
//!
//! Fetches a post by id, optionally insisting that the caller wrote it.
//! Every modifying route goes through [`GetPostUseCase::find_owned`] first.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Fails with `PostNotFound` for an unknown id
    pub async fn find(&self, post_id: PostId) -> BlogResult<Post> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound(post_id))
    }

    /// Like [`find`](Self::find), and additionally `NotAuthor` unless
    /// `user_id` wrote the post
    pub async fn find_owned(&self, post_id: PostId, user_id: UserId) -> BlogResult<Post> {
        let post = self.find(post_id).await?;
        post.ensure_author(user_id)?;
        Ok(post)
    }
}
