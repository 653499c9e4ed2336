//! Post Draft Value Object
//!
//! Title and body as submitted. The title must be non-empty; the body may be
//! empty.

use crate::error::{BlogError, BlogResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    body: String,
}

impl PostDraft {
    pub fn new(title: String, body: String) -> BlogResult<Self> {
        if title.is_empty() {
            return Err(BlogError::TitleRequired);
        }
        Ok(Self { title, body })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
