//! # claro-core
//!
//! Core types and domain logic for the claro text library.
//!
//! This crate provides the document model and store, the easy-read rewrite
//! heuristic, text utilities, the upload acceptance policy, and the
//! extraction trait that the API crate implements.

pub mod defaults;
pub mod error;
pub mod models;
pub mod rewrite;
pub mod store;
pub mod text;
pub mod traits;
pub mod upload_policy;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{DocumentKind, DocumentRecord, DocumentResponse, NewDocument};
pub use rewrite::rewrite;
pub use store::DocumentStore;
pub use text::{clamp_chars, collapse_whitespace, to_snippet};
pub use traits::TextExtractor;
pub use upload_policy::{
    is_allowed_image_data, is_allowed_image_type, sanitize_filename, ALLOWED_IMAGE_TYPES,
};
