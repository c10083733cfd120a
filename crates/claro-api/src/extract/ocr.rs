//! Image OCR using `tesseract`.

use std::io::Write;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

use claro_core::defaults::{self, EXTRACTION_CMD_TIMEOUT_SECS};
use claro_core::{Error, Result, TextExtractor};

use super::run_cmd_with_timeout;

/// Recognizes text in raster images (jpeg/png/webp) using `tesseract`.
pub struct ImageOcrExtractor {
    language: String,
}

impl ImageOcrExtractor {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// Build from the `OCR_LANGUAGE` env var, defaulting to English.
    pub fn from_env() -> Self {
        let language =
            std::env::var("OCR_LANGUAGE").unwrap_or_else(|_| defaults::OCR_LANGUAGE.to_string());
        Self::new(language)
    }
}

#[async_trait]
impl TextExtractor for ImageOcrExtractor {
    async fn extract(&self, data: &[u8], filename: &str) -> Result<String> {
        if data.is_empty() {
            return Err(Error::InvalidInput(
                "Cannot OCR empty image data".to_string(),
            ));
        }

        // Write data to a temporary file. Tesseract sniffs the image format
        // from content, so no extension is needed.
        let mut tmpfile = NamedTempFile::new()?;
        tmpfile.write_all(data)?;
        let tmp_path = tmpfile.path().to_string_lossy().to_string();

        debug!(filename, language = %self.language, bytes = data.len(), "OCRing image");

        // tesseract INPUT stdout -l LANG -- prints recognized text to stdout
        run_cmd_with_timeout(
            Command::new("tesseract")
                .arg(&tmp_path)
                .arg("stdout")
                .arg("-l")
                .arg(&self.language),
            EXTRACTION_CMD_TIMEOUT_SECS,
        )
        .await
    }

    async fn health_check(&self) -> Result<bool> {
        match Command::new("tesseract").arg("--version").output().await {
            Ok(output) => Ok(output.status.success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "image_ocr"
    }
}
