//! Shared application state.

use std::sync::Arc;

use governor::RateLimiter;

use claro_core::{DocumentStore, TextExtractor};

/// Global rate limiter type (direct quota, no keyed bucketing for a
/// single-tenant server).
pub type GlobalRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory document store.
    pub store: DocumentStore,
    /// PDF text-layer extractor.
    pub pdf: Arc<dyn TextExtractor>,
    /// Image OCR extractor.
    pub ocr: Arc<dyn TextExtractor>,
    /// Global rate limiter (None if rate limiting is disabled).
    pub rate_limiter: Option<Arc<GlobalRateLimiter>>,
    /// Request body cap in bytes, also applied to multipart uploads.
    pub max_upload_bytes: usize,
}
