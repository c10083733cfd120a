//! Document CRUD endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use claro_core::defaults::{NOTE_MAX_CHARS, SOURCE_MAX_CHARS, TEXT_MAX_CHARS, TITLE_MAX_CHARS};
use claro_core::{DocumentKind, DocumentResponse, NewDocument};

use crate::{ApiError, AppState};

use super::validate_length;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTextDocumentRequest {
    /// Display title; defaults to "Note <id prefix>" when omitted.
    pub title: Option<String>,
    /// Document body, stored truncated to the text cap.
    pub text: Option<String>,
    /// Free-form annotation shown with the document.
    pub note: Option<String>,
    /// Where the text came from; folded into a default note when no
    /// explicit note is given.
    pub source: Option<String>,
}

/// Single-document response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentEnvelope {
    pub document: DocumentResponse,
}

/// Document list response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentResponse>,
}

/// Path ids are opaque; anything that does not parse as a UUID cannot
/// name a stored document and reads as absent.
fn parse_document_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound("Document not found".to_string()))
}

/// Create a document from manually entered text.
#[utoipa::path(
    post,
    path = "/documents/text",
    tag = "Documents",
    request_body = CreateTextDocumentRequest,
    responses(
        (status = 201, description = "Document created", body = DocumentEnvelope),
        (status = 400, description = "Validation failure")
    )
)]
pub async fn create_text_document(
    State(state): State<AppState>,
    Json(payload): Json<CreateTextDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentEnvelope>), ApiError> {
    let text = payload
        .text
        .ok_or_else(|| ApiError::BadRequest("text is required".to_string()))?;
    validate_length("text", &text, 1, TEXT_MAX_CHARS)?;
    if let Some(title) = &payload.title {
        validate_length("title", title, 1, TITLE_MAX_CHARS)?;
    }
    if let Some(note) = &payload.note {
        validate_length("note", note, 1, NOTE_MAX_CHARS)?;
    }
    if let Some(source) = &payload.source {
        validate_length("source", source, 1, SOURCE_MAX_CHARS)?;
    }

    // An explicit note wins; otherwise a supplied source is credited
    let note = payload
        .note
        .or_else(|| payload.source.as_ref().map(|s| format!("Imported from {}.", s)));

    let record = state
        .store
        .create(NewDocument {
            title: payload.title,
            kind: DocumentKind::Text,
            text,
            note,
            size_bytes: None,
        })
        .await;

    Ok((
        StatusCode::CREATED,
        Json(DocumentEnvelope {
            document: DocumentResponse::full(&record),
        }),
    ))
}

/// List all documents, newest first, without bodies.
#[utoipa::path(
    get,
    path = "/documents",
    tag = "Documents",
    responses((status = 200, description = "Document summaries", body = DocumentListResponse))
)]
pub async fn list_documents(State(state): State<AppState>) -> Json<DocumentListResponse> {
    let documents = state
        .store
        .list()
        .await
        .iter()
        .map(DocumentResponse::summary)
        .collect();
    Json(DocumentListResponse { documents })
}

/// Fetch one document with its full text.
#[utoipa::path(
    get,
    path = "/documents/{id}",
    tag = "Documents",
    params(("id" = String, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document", body = DocumentEnvelope),
        (status = 404, description = "No such document")
    )
)]
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DocumentEnvelope>, ApiError> {
    let id = parse_document_id(&id)?;
    let record = state
        .store
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Document not found".to_string()))?;

    Ok(Json(DocumentEnvelope {
        document: DocumentResponse::full(&record),
    }))
}

/// Delete a document.
#[utoipa::path(
    delete,
    path = "/documents/{id}",
    tag = "Documents",
    params(("id" = String, Path, description = "Document id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such document")
    )
)]
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_document_id(&id)?;
    if !state.store.remove(id).await {
        return Err(ApiError::NotFound("Document not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_id_valid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_document_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_document_id_garbage_is_not_found() {
        let err = parse_document_id("not-a-uuid").unwrap_err();
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "Document not found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
