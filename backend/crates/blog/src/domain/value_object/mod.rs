//! Value Object Module

pub mod post_draft;
