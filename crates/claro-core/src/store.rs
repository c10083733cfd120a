//! In-memory document store.
//!
//! Volatile by contract: records live exactly as long as the process. The
//! only mutations are insertion and deletion; a record is never updated in
//! place.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::defaults::TEXT_MAX_CHARS;
use crate::models::{DocumentRecord, NewDocument};
use crate::text::{clamp_chars, to_snippet};

/// Shared handle to the document table.
///
/// Cloning is cheap; all clones observe the same records. Writes are
/// single-step insertions or removals under the lock, so readers never see
/// a half-written record.
#[derive(Clone, Default)]
pub struct DocumentStore {
    documents: Arc<RwLock<HashMap<Uuid, DocumentRecord>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and insert a record.
    ///
    /// Generates a fresh id, truncates the text to the document cap,
    /// derives the title and note from the kind when absent, and computes
    /// the snippet. Returns the stored record.
    pub async fn create(&self, new: NewDocument) -> DocumentRecord {
        let id = Uuid::new_v4();
        let text = clamp_chars(&new.text, TEXT_MAX_CHARS).to_string();

        let title = new
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .unwrap_or_else(|| new.kind.default_title(id));

        let note = new
            .note
            .or_else(|| new.kind.default_note().map(String::from));

        let snippet = if text.is_empty() {
            String::new()
        } else {
            to_snippet(&text)
        };

        let record = DocumentRecord {
            id,
            title,
            kind: new.kind,
            text,
            note,
            snippet,
            created_at: Utc::now(),
            size_bytes: new.size_bytes,
        };

        let mut documents = self.documents.write().await;
        documents.insert(id, record.clone());
        debug!(document_id = %id, kind = %record.kind, "Document stored");

        record
    }

    /// All records, newest first. Equal timestamps break by id so the
    /// order is stable within one clock tick.
    pub async fn list(&self) -> Vec<DocumentRecord> {
        let documents = self.documents.read().await;
        let mut records: Vec<DocumentRecord> = documents.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        records
    }

    pub async fn get(&self, id: Uuid) -> Option<DocumentRecord> {
        self.documents.read().await.get(&id).cloned()
    }

    /// Remove a record irrecoverably. Returns `false` when no record with
    /// that id exists.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.documents.write().await.remove(&id).is_some();
        if removed {
            debug!(document_id = %id, "Document deleted");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentKind;

    fn text_document(text: &str) -> NewDocument {
        NewDocument {
            title: None,
            kind: DocumentKind::Text,
            text: text.to_string(),
            note: None,
            size_bytes: None,
        }
    }

    #[tokio::test]
    async fn test_create_derives_defaults() {
        let store = DocumentStore::new();
        let record = store.create(text_document("Some body text.")).await;

        let prefix = &record.id.to_string()[..6];
        assert_eq!(record.title, format!("Note {}", prefix));
        assert_eq!(record.note.as_deref(), Some("Added manually."));
        assert_eq!(record.snippet, "Some body text.");
        assert_eq!(record.size_bytes, None);
        assert_eq!(record.kind, DocumentKind::Text);
    }

    #[tokio::test]
    async fn test_create_trims_supplied_title() {
        let store = DocumentStore::new();

        let record = store
            .create(NewDocument {
                title: Some("  My title  ".to_string()),
                ..text_document("body")
            })
            .await;
        assert_eq!(record.title, "My title");

        // Whitespace-only titles fall back to the default
        let record = store
            .create(NewDocument {
                title: Some("   ".to_string()),
                ..text_document("body")
            })
            .await;
        assert!(record.title.starts_with("Note "));
    }

    #[tokio::test]
    async fn test_create_clamps_text() {
        let store = DocumentStore::new();
        let record = store.create(text_document(&"x".repeat(20_500))).await;

        assert_eq!(record.text.chars().count(), 20_000);
    }

    #[tokio::test]
    async fn test_snippet_is_prefix_of_collapsed_text() {
        let store = DocumentStore::new();
        let body = "line one\nline two  with   gaps ".repeat(30);
        let record = store.create(text_document(&body)).await;

        let collapsed = crate::text::collapse_whitespace(&record.text);
        if record.snippet.ends_with('…') {
            assert_eq!(record.snippet.chars().count(), 280);
            let prefix: String = record.snippet.chars().take(279).collect();
            assert!(collapsed.starts_with(&prefix));
        } else {
            assert_eq!(record.snippet, collapsed);
        }
    }

    #[tokio::test]
    async fn test_empty_text_has_empty_snippet() {
        let store = DocumentStore::new();
        let record = store
            .create(NewDocument {
                kind: DocumentKind::Pdf,
                note: Some("scanned".to_string()),
                ..text_document("")
            })
            .await;

        assert_eq!(record.snippet, "");
        assert_eq!(record.text, "");
    }

    #[tokio::test]
    async fn test_explicit_note_is_kept() {
        let store = DocumentStore::new();
        let record = store
            .create(NewDocument {
                note: Some("Imported from scanner.".to_string()),
                ..text_document("body")
            })
            .await;

        assert_eq!(record.note.as_deref(), Some("Imported from scanner."));
    }

    #[tokio::test]
    async fn test_non_text_kinds_default_to_no_note() {
        let store = DocumentStore::new();
        let record = store
            .create(NewDocument {
                kind: DocumentKind::Image,
                ..text_document("ocr output")
            })
            .await;

        assert_eq!(record.note, None);
        assert!(record.title.starts_with("Image "));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = DocumentStore::new();
        let a = store.create(text_document("a")).await;
        let b = store.create(text_document("b")).await;

        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let store = DocumentStore::new();

        let mut created = Vec::new();
        for i in 0..3 {
            created.push(store.create(text_document(&format!("doc {}", i))).await);
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let listed = store.list().await;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].id, created[2].id);
        assert_eq!(listed[1].id, created[1].id);
        assert_eq!(listed[2].id, created[0].id);

        for pair in listed.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_get_and_remove() {
        let store = DocumentStore::new();
        let record = store.create(text_document("body")).await;

        assert!(store.get(record.id).await.is_some());

        assert!(store.remove(record.id).await);
        assert!(store.get(record.id).await.is_none());

        // Removing twice reports not-found
        assert!(!store.remove(record.id).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = DocumentStore::new();
        let clone = store.clone();

        let record = clone.create(text_document("shared")).await;
        assert!(store.get(record.id).await.is_some());
    }
}
