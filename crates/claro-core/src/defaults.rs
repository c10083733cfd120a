//! Centralized default constants for claro.
//!
//! **This module is the single source of truth** for all shared default
//! values. Both crates reference these constants instead of defining their
//! own magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Maximum stored document text length in characters. Longer text is
/// truncated at creation, never rejected.
pub const TEXT_MAX_CHARS: usize = 20_000;

/// Maximum snippet/preview length in characters. Snippets longer than this
/// are cut at `TEXT_SNIPPET_MAX_CHARS - 1` and suffixed with an ellipsis.
pub const TEXT_SNIPPET_MAX_CHARS: usize = 280;

/// Characters of the document id used in default titles ("Note a1b2c3").
pub const TITLE_ID_PREFIX_CHARS: usize = 6;

/// Maximum title length in characters for manually created documents.
pub const TITLE_MAX_CHARS: usize = 120;

/// Maximum note annotation length in characters.
pub const NOTE_MAX_CHARS: usize = 240;

/// Maximum source label length in characters.
pub const SOURCE_MAX_CHARS: usize = 200;

// =============================================================================
// REWRITE
// =============================================================================

/// Maximum input sentence length in characters for rewrite requests.
pub const SENTENCE_MAX_CHARS: usize = 1500;

/// Maximum number of rewrite candidates returned.
pub const REWRITE_MAX_CANDIDATES: usize = 5;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 5000;

/// Default rate limit: max requests per period.
pub const RATE_LIMIT_REQUESTS: u64 = 60;

/// Default rate limit: period in seconds.
pub const RATE_LIMIT_PERIOD_SECS: u64 = 60;

/// Default CORS max-age in seconds (1 hour).
pub const CORS_MAX_AGE_SECS: u64 = 3600;

// =============================================================================
// UPLOADS & EXTRACTION
// =============================================================================

/// Maximum upload size in bytes (10 MB). Uploads are held fully in memory
/// for the duration of one request, so this also bounds per-request memory.
/// Configurable via `MAX_UPLOAD_SIZE_BYTES` env var.
pub const MAX_UPLOAD_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Per-command timeout for external extraction tools (seconds).
pub const EXTRACTION_CMD_TIMEOUT_SECS: u64 = 60;

/// Default tesseract language code. Configurable via `OCR_LANGUAGE` env var.
pub const OCR_LANGUAGE: &str = "eng";

/// Maximum filename length (ext4/NTFS compatible).
pub const FILENAME_MAX_LENGTH: usize = 255;
