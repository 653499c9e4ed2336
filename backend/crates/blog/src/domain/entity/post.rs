//! Post Entity
//!
//! A post as read back from storage, joined with its author's name.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::error::{BlogError, BlogResult};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub author_id: UserId,
    /// `user.username` of the author
    pub author_name: String,
    pub created: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Fail unless `user_id` wrote this post
    pub fn ensure_author(&self, user_id: UserId) -> BlogResult<()> {
        if !self.is_authored_by(user_id) {
            return Err(BlogError::NotAuthor(self.post_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_by(author: i64) -> Post {
        Post {
            post_id: PostId::from_raw(3),
            author_id: UserId::from_raw(author),
            author_name: "alice".to_string(),
            created: Utc::now(),
            title: "t".to_string(),
            body: "b".to_string(),
        }
    }

    #[test]
    fn test_ensure_author() {
        let post = post_by(1);
        assert!(post.ensure_author(UserId::from_raw(1)).is_ok());

        let err = post.ensure_author(UserId::from_raw(2)).unwrap_err();
        assert!(matches!(err, BlogError::NotAuthor(id) if id == PostId::from_raw(3)));
    }
}
