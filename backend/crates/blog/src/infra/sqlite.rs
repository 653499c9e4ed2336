//! SQLite Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::SqlitePool;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_draft::PostDraft;
use crate::error::BlogResult;

const SELECT_POSTS: &str = "SELECT p.id, p.title, p.body, p.created, p.author_id, u.username \
     FROM post p JOIN user u ON p.author_id = u.id";

/// SQLite-backed post repository
#[derive(Clone)]
pub struct SqliteBlogRepository {
    pool: SqlitePool,
}

impl SqliteBlogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    body: String,
    created: DateTime<Utc>,
    author_id: i64,
    username: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            post_id: PostId::from_raw(row.id),
            author_id: UserId::from_raw(row.author_id),
            author_name: row.username,
            created: row.created,
            title: row.title,
            body: row.body,
        }
    }
}

impl PostRepository for SqliteBlogRepository {
    async fn list_recent(&self) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{SELECT_POSTS} ORDER BY p.created DESC, p.id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POSTS} WHERE p.id = ?"))
            .bind(post_id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Post::from))
    }

    async fn create(
        &self,
        author_id: UserId,
        draft: &PostDraft,
        created: DateTime<Utc>,
    ) -> BlogResult<PostId> {
        let done = sqlx::query(
            "INSERT INTO post (title, body, author_id, created) VALUES (?, ?, ?, ?)",
        )
        .bind(draft.title())
        .bind(draft.body())
        .bind(author_id.value())
        .bind(created)
        .execute(&self.pool)
        .await?;

        Ok(PostId::from_raw(done.last_insert_rowid()))
    }

    async fn update(&self, post_id: PostId, draft: &PostDraft) -> BlogResult<()> {
        sqlx::query("UPDATE post SET title = ?, body = ? WHERE id = ?")
            .bind(draft.title())
            .bind(draft.body())
            .bind(post_id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, post_id: PostId) -> BlogResult<()> {
        sqlx::query("DELETE FROM post WHERE id = ?")
            .bind(post_id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
