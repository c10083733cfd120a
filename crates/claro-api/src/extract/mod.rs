//! Text extraction via external command-line tools.
//!
//! Both extractors shell out to installed binaries (poppler's `pdftotext`
//! and `tesseract`) rather than linking native parsing libraries. Every
//! invocation is guarded by a per-command timeout. The HTTP layer depends
//! only on the `TextExtractor` trait, so tests swap these for stubs.

pub mod ocr;
pub mod pdf;

pub use ocr::ImageOcrExtractor;
pub use pdf::PdfTextExtractor;

use tokio::process::Command;

use claro_core::{Error, Result};

/// Run a command with a timeout, returning stdout as a string.
pub(crate) async fn run_cmd_with_timeout(cmd: &mut Command, timeout_secs: u64) -> Result<String> {
    let output = tokio::time::timeout(std::time::Duration::from_secs(timeout_secs), cmd.output())
        .await
        .map_err(|_| {
            Error::Timeout(format!(
                "External command timed out after {}s",
                timeout_secs
            ))
        })?
        .map_err(|e| Error::Extraction(format!("Failed to execute command: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Extraction(format!(
            "Command failed (exit {}): {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_cmd_captures_stdout() {
        let result = run_cmd_with_timeout(Command::new("echo").arg("hello"), 5).await;
        assert_eq!(result.unwrap().trim(), "hello");
    }

    #[tokio::test]
    async fn test_run_cmd_missing_binary() {
        let result = run_cmd_with_timeout(&mut Command::new("claro-no-such-binary"), 5).await;
        match result {
            Err(Error::Extraction(msg)) => assert!(msg.contains("Failed to execute command")),
            other => panic!("Expected Extraction error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_cmd_nonzero_exit() {
        let result = run_cmd_with_timeout(&mut Command::new("false"), 5).await;
        match result {
            Err(Error::Extraction(msg)) => assert!(msg.contains("Command failed")),
            other => panic!("Expected Extraction error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_cmd_timeout() {
        let result = run_cmd_with_timeout(Command::new("sleep").arg("5"), 1).await;
        match result {
            Err(Error::Timeout(msg)) => assert!(msg.contains("timed out after 1s")),
            other => panic!("Expected Timeout error, got {:?}", other),
        }
    }
}
