//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::post::Post;
pub use repository::PostRepository;
pub use value_object::post_draft::PostDraft;
