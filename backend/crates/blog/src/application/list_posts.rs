//! List Posts Use Case

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;

pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self) -> BlogResult<Vec<Post>> {
        self.post_repo.list_recent().await
    }
}
