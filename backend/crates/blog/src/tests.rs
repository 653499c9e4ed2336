//! Cross-layer tests: use cases over the SQLite repository.

use std::sync::Arc;

use kernel::id::{PostId, UserId};
use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::error::BlogError;
use crate::infra::sqlite::SqliteBlogRepository;

struct Fixture {
    _dir: TempDir,
    pool: SqlitePool,
    repo: Arc<SqliteBlogRepository>,
}

async fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let pool = platform::database::connect(&dir.path().join("blog.sqlite"))
        .await
        .unwrap();
    platform::database::init_db(&pool).await.unwrap();

    Fixture {
        _dir: dir,
        repo: Arc::new(SqliteBlogRepository::new(pool.clone())),
        pool,
    }
}

impl Fixture {
    /// Password hashes are irrelevant to the blog crate
    async fn user(&self, name: &str) -> UserId {
        let done = sqlx::query("INSERT INTO user (username, password) VALUES (?, 'x')")
            .bind(name)
            .execute(&self.pool)
            .await
            .unwrap();
        UserId::from_raw(done.last_insert_rowid())
    }

    async fn post(&self, author: UserId, title: &str) -> PostId {
        CreatePostUseCase::new(self.repo.clone())
            .execute(
                author,
                CreatePostInput {
                    title: title.to_string(),
                    body: format!("{title} body"),
                },
            )
            .await
            .unwrap()
    }

    async fn post_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM post")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

fn edit(title: &str, body: &str) -> UpdatePostInput {
    UpdatePostInput {
        title: title.to_string(),
        body: body.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_list_newest_first() {
    let fx = fixture().await;
    let alice = fx.user("alice").await;
    let bob = fx.user("bob").await;

    let first = fx.post(alice, "first").await;
    let second = fx.post(bob, "second").await;

    let posts = ListPostsUseCase::new(fx.repo.clone()).execute().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].post_id, second);
    assert_eq!(posts[0].author_name, "bob");
    assert_eq!(posts[1].post_id, first);
    assert_eq!(posts[1].author_name, "alice");
    assert_eq!(posts[1].body, "first body");
}

#[tokio::test]
async fn test_create_requires_title() {
    let fx = fixture().await;
    let alice = fx.user("alice").await;

    let err = CreatePostUseCase::new(fx.repo.clone())
        .execute(
            alice,
            CreatePostInput {
                title: String::new(),
                body: "body".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::TitleRequired));
    assert_eq!(fx.post_count().await, 0);
}

#[tokio::test]
async fn test_get_post() {
    let fx = fixture().await;
    let alice = fx.user("alice").await;
    let bob = fx.user("bob").await;
    let post_id = fx.post(alice, "hello").await;

    let get = GetPostUseCase::new(fx.repo.clone());

    let post = get.find(post_id).await.unwrap();
    assert_eq!(post.title, "hello");
    assert!(get.find_owned(post_id, alice).await.is_ok());

    let err = get.find_owned(post_id, bob).await.unwrap_err();
    assert_eq!(err.to_string(), format!("You are not the author of post {post_id}."));

    let missing = PostId::from_raw(999);
    let err = get.find(missing).await.unwrap_err();
    assert_eq!(err.to_string(), "Post id 999 doesn't exist.");
}

#[tokio::test]
async fn test_update_by_author() {
    let fx = fixture().await;
    let alice = fx.user("alice").await;
    let post_id = fx.post(alice, "draft").await;

    UpdatePostUseCase::new(fx.repo.clone())
        .execute(post_id, alice, edit("final", "new body"))
        .await
        .unwrap();

    let post = GetPostUseCase::new(fx.repo.clone())
        .find(post_id)
        .await
        .unwrap();
    assert_eq!(post.title, "final");
    assert_eq!(post.body, "new body");
}

#[tokio::test]
async fn test_update_rejections_write_nothing() {
    let fx = fixture().await;
    let alice = fx.user("alice").await;
    let bob = fx.user("bob").await;
    let post_id = fx.post(alice, "mine").await;
    let update = UpdatePostUseCase::new(fx.repo.clone());

    let err = update
        .execute(post_id, bob, edit("stolen", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::NotAuthor(_)));

    let err = update
        .execute(post_id, alice, edit("", "body"))
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::TitleRequired));

    // Ownership is checked before the form
    let err = update.execute(post_id, bob, edit("", "")).await.unwrap_err();
    assert!(matches!(err, BlogError::NotAuthor(_)));

    let err = update
        .execute(PostId::from_raw(42), alice, edit("t", "b"))
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::PostNotFound(_)));

    let post = GetPostUseCase::new(fx.repo.clone())
        .find(post_id)
        .await
        .unwrap();
    assert_eq!(post.title, "mine");
}

#[tokio::test]
async fn test_delete() {
    let fx = fixture().await;
    let alice = fx.user("alice").await;
    let bob = fx.user("bob").await;
    let post_id = fx.post(alice, "bye").await;
    let delete = DeletePostUseCase::new(fx.repo.clone());

    let err = delete.execute(post_id, bob).await.unwrap_err();
    assert!(matches!(err, BlogError::NotAuthor(_)));
    assert_eq!(fx.post_count().await, 1);

    delete.execute(post_id, alice).await.unwrap();
    assert_eq!(fx.post_count().await, 0);

    let err = delete.execute(post_id, alice).await.unwrap_err();
    assert!(matches!(err, BlogError::PostNotFound(_)));
}
