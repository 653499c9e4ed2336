//! Request Extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use kernel::id::PostId;

use crate::error::BlogError;

/// Post id from the `{id}` path segment
///
/// A segment that is not an integer row id is rejected as a missing post.
#[derive(Debug, Clone, Copy)]
pub struct PostIdPath(pub PostId);

impl<S> FromRequestParts<S> for PostIdPath
where
    S: Send + Sync,
{
    type Rejection = BlogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| BlogError::MalformedPostId(e.body_text()))?;

        raw.parse::<PostId>()
            .map(PostIdPath)
            .map_err(|_| BlogError::MalformedPostId(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/{id}/update",
            get(|PostIdPath(post_id): PostIdPath| async move { post_id.to_string() }),
        )
    }

    async fn get_path(uri: &str) -> axum::response::Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_malformed_id_detail() {
        let response = get_path("/abc/update").await;
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Post id abc doesn't exist.");
    }

    #[tokio::test]
    async fn test_numeric_id() {
        let response = get_path("/42/update").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"42");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found_problem() {
        for uri in ["/abc/update", "/99999999999999999999/update"] {
            let response = get_path(uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["status"], 404);
            assert_eq!(body["title"], "Not Found");
        }
    }
}
