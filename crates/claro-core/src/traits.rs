//! Extraction abstractions.
//!
//! The HTTP layer depends on this trait rather than on concrete CLI
//! wrappers, so tests can inject stub extractors.

use async_trait::async_trait;

use crate::error::Result;

/// Adapter that turns an uploaded file into plain text.
///
/// Implementations wrap one external tool each (pdftotext, tesseract).
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract text from raw file data.
    ///
    /// `filename` is the sanitized client filename, used for scratch-file
    /// naming and log context only.
    async fn extract(&self, data: &[u8], filename: &str) -> Result<String>;

    /// Check if the extractor's external dependencies are available.
    async fn health_check(&self) -> Result<bool>;

    /// Human-readable name of this extractor.
    fn name(&self) -> &str;
}
