//! claro-api - HTTP API server for claro
//!
//! Exposes the document library and rewrite engine over HTTP/JSON. The
//! router is assembled separately from `main` so integration tests can run
//! it on an ephemeral port with stub extractors injected through
//! [`claro_core::TextExtractor`].

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, GlobalRateLimiter};
