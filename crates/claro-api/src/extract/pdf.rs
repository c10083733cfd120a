//! PDF text-layer extraction using `pdftotext` (poppler-utils).

use std::io::Write;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

use claro_core::defaults::EXTRACTION_CMD_TIMEOUT_SECS;
use claro_core::{Error, Result, TextExtractor};

use super::run_cmd_with_timeout;

/// Extracts the embedded text layer from PDF files using `pdftotext`.
///
/// Scanned PDFs have no text layer; extraction succeeds but yields empty
/// text, which the upload handler surfaces as a note on the document.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: &[u8], filename: &str) -> Result<String> {
        if data.is_empty() {
            return Err(Error::InvalidInput(
                "Cannot extract text from empty PDF data".to_string(),
            ));
        }

        // Validate PDF magic bytes (%PDF)
        if data.len() < 4 || &data[0..4] != b"%PDF" {
            return Err(Error::InvalidInput(format!(
                "File '{}' is not a valid PDF (missing %PDF header)",
                filename
            )));
        }

        // Write data to a temporary file (pdftotext reads from a file path)
        let mut tmpfile = NamedTempFile::new()?;
        tmpfile.write_all(data)?;
        let tmp_path = tmpfile.path().to_string_lossy().to_string();

        debug!(filename, bytes = data.len(), "Extracting PDF text layer");

        run_cmd_with_timeout(
            Command::new("pdftotext").arg(&tmp_path).arg("-"),
            EXTRACTION_CMD_TIMEOUT_SECS,
        )
        .await
    }

    async fn health_check(&self) -> Result<bool> {
        match Command::new("pdftotext").arg("-v").output().await {
            Ok(output) => {
                // pdftotext -v prints version to stderr and exits with 0 or 99
                // depending on the version. Both indicate the binary exists.
                Ok(output.status.success() || output.status.code() == Some(99))
            }
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "pdf_text"
    }
}
