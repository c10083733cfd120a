//! Core data models for claro.
//!
//! These types are shared across the claro crates and represent the
//! document library's domain entities and their wire shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults::TITLE_ID_PREFIX_CHARS;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// Kind of a stored document. Set at creation, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Text,
    Pdf,
    Image,
}

impl DocumentKind {
    /// Default display title for a document of this kind, derived from the
    /// first characters of its id ("Note a1b2c3", "Image 9f8e7d", ...).
    pub fn default_title(&self, id: Uuid) -> String {
        let id_str = id.to_string();
        let prefix = &id_str[..TITLE_ID_PREFIX_CHARS];
        match self {
            DocumentKind::Image => format!("Image {}", prefix),
            DocumentKind::Text => format!("Note {}", prefix),
            DocumentKind::Pdf => format!("Document {}", prefix),
        }
    }

    /// Default annotation for a document of this kind when the caller
    /// supplied none. Only manually entered text gets one.
    pub fn default_note(&self) -> Option<&'static str> {
        match self {
            DocumentKind::Text => Some("Added manually."),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Text => write!(f, "text"),
            DocumentKind::Pdf => write!(f, "pdf"),
            DocumentKind::Image => write!(f, "image"),
        }
    }
}

/// A stored document. Records are immutable once created; the only
/// mutations the store supports are insertion and deletion.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub text: String,
    pub note: Option<String>,
    /// Whitespace-collapsed preview of `text`, computed once at creation.
    pub snippet: String,
    pub created_at: DateTime<Utc>,
    /// Original upload size, unset for manually entered text.
    pub size_bytes: Option<u64>,
}

/// Input for creating a document. Optional fields fall back to
/// kind-specific defaults at creation time.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: Option<String>,
    pub kind: DocumentKind,
    pub text: String,
    pub note: Option<String>,
    pub size_bytes: Option<u64>,
}

// =============================================================================
// WIRE SHAPES
// =============================================================================

/// Wire representation of a document. `text` is present only on full
/// responses (create, get, upload); list summaries omit it entirely.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub created_at: DateTime<Utc>,
    pub size_bytes: Option<u64>,
    pub note: Option<String>,
    pub snippet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DocumentResponse {
    /// Full response including the document body.
    pub fn full(record: &DocumentRecord) -> Self {
        Self {
            text: Some(record.text.clone()),
            ..Self::summary(record)
        }
    }

    /// Summary response without the document body.
    pub fn summary(record: &DocumentRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            kind: record.kind,
            created_at: record.created_at,
            size_bytes: record.size_bytes,
            note: record.note.clone(),
            snippet: record.snippet.clone(),
            text: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DocumentRecord {
        DocumentRecord {
            id: Uuid::new_v4(),
            title: "Meeting notes".to_string(),
            kind: DocumentKind::Text,
            text: "Discussed the launch plan.".to_string(),
            note: Some("Added manually.".to_string()),
            snippet: "Discussed the launch plan.".to_string(),
            created_at: Utc::now(),
            size_bytes: None,
        }
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DocumentKind::Text).unwrap(), "\"text\"");
        assert_eq!(serde_json::to_string(&DocumentKind::Pdf).unwrap(), "\"pdf\"");
        assert_eq!(serde_json::to_string(&DocumentKind::Image).unwrap(), "\"image\"");
    }

    #[test]
    fn test_default_title_uses_id_prefix() {
        let id = Uuid::nil();
        assert_eq!(DocumentKind::Text.default_title(id), "Note 000000");
        assert_eq!(DocumentKind::Image.default_title(id), "Image 000000");
        assert_eq!(DocumentKind::Pdf.default_title(id), "Document 000000");
    }

    #[test]
    fn test_default_note_only_for_text() {
        assert_eq!(DocumentKind::Text.default_note(), Some("Added manually."));
        assert_eq!(DocumentKind::Pdf.default_note(), None);
        assert_eq!(DocumentKind::Image.default_note(), None);
    }

    #[test]
    fn test_record_wire_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["type"], "text");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("sizeBytes").is_some());
        assert!(json.get("kind").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_summary_omit_text_full_includes_it() {
        let record = sample_record();

        let summary = serde_json::to_value(DocumentResponse::summary(&record)).unwrap();
        assert!(summary.get("text").is_none());
        assert_eq!(summary["snippet"], "Discussed the launch plan.");

        let full = serde_json::to_value(DocumentResponse::full(&record)).unwrap();
        assert_eq!(full["text"], "Discussed the launch plan.");
    }

    #[test]
    fn test_absent_optionals_serialize_as_null() {
        let mut record = sample_record();
        record.note = None;
        record.size_bytes = None;

        let json = serde_json::to_value(DocumentResponse::full(&record)).unwrap();
        assert!(json["note"].is_null());
        assert!(json["sizeBytes"].is_null());
    }
}
