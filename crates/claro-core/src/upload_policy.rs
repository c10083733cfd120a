//! Upload acceptance policy for the ingestion endpoints.
//!
//! Two gates run before any extractor sees a payload:
//! 1. The client-declared MIME type must be in the closed allow-list.
//! 2. For images, the magic bytes must identify one of the allowed formats.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::defaults::FILENAME_MAX_LENGTH;

/// Declared MIME types accepted by the image OCR endpoint.
///
/// `image/jpg` is not a registered type but browsers and older clients
/// still send it, so it stays on the list.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg", "image/webp"];

static ALLOWED_IMAGE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ALLOWED_IMAGE_TYPES.iter().copied().collect());

/// Check a client-declared content type against the image allow-list.
pub fn is_allowed_image_type(declared: &str) -> bool {
    ALLOWED_IMAGE_SET.contains(declared.trim().to_ascii_lowercase().as_str())
}

/// Check that the payload's magic bytes identify an allowed image format.
///
/// `infer` reports canonical types only, so a payload declared as
/// `image/jpg` arrives here as `image/jpeg`. Payloads with no recognizable
/// signature are rejected outright.
pub fn is_allowed_image_data(data: &[u8]) -> bool {
    match infer::get(data) {
        Some(kind) => matches!(kind.mime_type(), "image/jpeg" | "image/png" | "image/webp"),
        None => false,
    }
}

/// Sanitize an uploaded filename for use as a document title.
pub fn sanitize_filename(filename: &str) -> String {
    // Remove path components
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    // Replace dangerous characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '|' | '?' | '*' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let sanitized = sanitized.trim();
    if sanitized.is_empty() {
        return "unnamed_file".to_string();
    }

    // Truncate if too long (preserve extension)
    if sanitized.chars().count() > FILENAME_MAX_LENGTH {
        if let Some(dot_pos) = sanitized.rfind('.') {
            let (stem, ext) = sanitized.split_at(dot_pos);
            let keep = FILENAME_MAX_LENGTH.saturating_sub(ext.chars().count());
            let stem: String = stem.chars().take(keep).collect();
            return format!("{}{}", stem, ext);
        }
        return sanitized.chars().take(FILENAME_MAX_LENGTH).collect();
    }

    sanitized.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_accepts_declared_image_types() {
        for declared in ALLOWED_IMAGE_TYPES {
            assert!(is_allowed_image_type(declared), "{} rejected", declared);
        }
    }

    #[test]
    fn test_allow_list_is_case_insensitive() {
        assert!(is_allowed_image_type("IMAGE/PNG"));
        assert!(is_allowed_image_type(" image/jpeg "));
    }

    #[test]
    fn test_allow_list_rejects_other_types() {
        assert!(!is_allowed_image_type("text/plain"));
        assert!(!is_allowed_image_type("application/pdf"));
        assert!(!is_allowed_image_type("image/gif"));
        assert!(!is_allowed_image_type("image/svg+xml"));
        assert!(!is_allowed_image_type(""));
    }

    #[test]
    fn test_png_magic_bytes_accepted() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(is_allowed_image_data(&png));
    }

    #[test]
    fn test_jpeg_magic_bytes_accepted() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];
        assert!(is_allowed_image_data(&jpeg));
    }

    #[test]
    fn test_webp_magic_bytes_accepted() {
        let webp = [
            0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50,
        ];
        assert!(is_allowed_image_data(&webp));
    }

    #[test]
    fn test_gif_magic_bytes_rejected() {
        // Real image format, but not on the list
        let gif = [0x47, 0x49, 0x46, 0x38, 0x39, 0x61];
        assert!(!is_allowed_image_data(&gif));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let garbage = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x11, 0x22, 0x33];
        assert!(!is_allowed_image_data(&garbage));
        assert!(!is_allowed_image_data(b"this is not an image"));
        assert!(!is_allowed_image_data(&[]));
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("/etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Windows\\scan.png"), "scan.png");
        assert_eq!(sanitize_filename("../../secret.pdf"), "secret.pdf");
    }

    #[test]
    fn test_sanitize_replaces_dangerous_characters() {
        assert_eq!(sanitize_filename("file<>:test.pdf"), "file___test.pdf");
        assert_eq!(sanitize_filename("file|name?.png"), "file_name_.png");
    }

    #[test]
    fn test_sanitize_truncates_long_names_preserving_extension() {
        let long_name = format!("{}.pdf", "a".repeat(300));
        let sanitized = sanitize_filename(&long_name);
        assert!(sanitized.chars().count() <= FILENAME_MAX_LENGTH);
        assert!(sanitized.ends_with(".pdf"));
    }

    #[test]
    fn test_sanitize_empty_and_whitespace() {
        assert_eq!(sanitize_filename(""), "unnamed_file");
        assert_eq!(sanitize_filename("   "), "unnamed_file");
    }

    #[test]
    fn test_sanitize_keeps_ordinary_names() {
        assert_eq!(sanitize_filename("report 2024.pdf"), "report 2024.pdf");
        assert_eq!(sanitize_filename("photo.jpeg"), "photo.jpeg");
    }
}
