//! File upload endpoints (PDF text extraction and image OCR).

use axum::extract::State;
use axum::Json;
use tracing::error;

use claro_core::{
    is_allowed_image_data, is_allowed_image_type, sanitize_filename, DocumentKind,
    DocumentResponse, NewDocument,
};

use crate::{ApiError, AppState};

use super::documents::DocumentEnvelope;

/// One file pulled out of a multipart body.
struct FileUpload {
    data: Vec<u8>,
    content_type: Option<String>,
    filename: Option<String>,
}

/// Drain the multipart stream and keep the last `file` field.
async fn read_file_field(
    mut multipart: axum::extract::Multipart,
) -> Result<Option<FileUpload>, ApiError> {
    let mut upload: Option<FileUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart error: {}", e)))?
    {
        let field_name = field.name().map(|n| n.to_string());
        match field_name.as_deref() {
            Some("file") => {
                let content_type = field.content_type().map(|c| c.to_string());
                let filename = field
                    .file_name()
                    .map(|f| f.to_string())
                    .filter(|f| !f.trim().is_empty());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Read error: {}", e)))?
                    .to_vec();
                upload = Some(FileUpload {
                    data,
                    content_type,
                    filename,
                });
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(upload)
}

/// Create a document from an uploaded PDF's embedded text layer.
#[utoipa::path(
    post,
    path = "/upload/pdf",
    tag = "Uploads",
    responses(
        (status = 200, description = "Document created from PDF text", body = DocumentEnvelope),
        (status = 400, description = "Missing file or wrong content type"),
        (status = 500, description = "Extraction failure")
    )
)]
pub async fn upload_pdf(
    State(state): State<AppState>,
    multipart: axum::extract::Multipart,
) -> Result<Json<DocumentEnvelope>, ApiError> {
    let upload = read_file_field(multipart)
        .await?
        .ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    let declared = upload.content_type.as_deref().unwrap_or("");
    if !declared.trim().eq_ignore_ascii_case("application/pdf") {
        return Err(ApiError::BadRequest(
            "Please upload a PDF (application/pdf)".to_string(),
        ));
    }

    let title = sanitize_filename(upload.filename.as_deref().unwrap_or("PDF document"));
    let size_bytes = upload.data.len() as u64;

    let raw = state.pdf.extract(&upload.data, &title).await.map_err(|e| {
        if matches!(e, claro_core::Error::InvalidInput(_)) {
            return e.into();
        }
        error!(error = %e, "PDF extraction failed");
        ApiError::Internal("Failed to parse PDF".to_string())
    })?;

    let text = raw.trim().to_string();
    let note = if text.is_empty() {
        Some("No embedded text found (likely a scanned PDF). Use Image OCR instead.".to_string())
    } else {
        None
    };

    let record = state
        .store
        .create(NewDocument {
            title: Some(title),
            kind: DocumentKind::Pdf,
            text,
            note,
            size_bytes: Some(size_bytes),
        })
        .await;

    Ok(Json(DocumentEnvelope {
        document: DocumentResponse::full(&record),
    }))
}

/// Create a document by OCRing an uploaded image.
#[utoipa::path(
    post,
    path = "/upload/image",
    tag = "Uploads",
    responses(
        (status = 200, description = "Document created from recognized text", body = DocumentEnvelope),
        (status = 400, description = "Missing file or not an allowed image type"),
        (status = 500, description = "OCR failure")
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: axum::extract::Multipart,
) -> Result<Json<DocumentEnvelope>, ApiError> {
    let upload = read_file_field(multipart)
        .await?
        .ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    // Both the declared content type and the actual bytes must look like
    // an allowed image; a spoofed declared type alone is not enough.
    let declared = upload.content_type.as_deref().unwrap_or("");
    if !is_allowed_image_type(declared) || !is_allowed_image_data(&upload.data) {
        return Err(ApiError::BadRequest(
            "Please upload an image (jpeg/png/webp)".to_string(),
        ));
    }

    let title = sanitize_filename(upload.filename.as_deref().unwrap_or("Image document"));
    let size_bytes = upload.data.len() as u64;

    let raw = state.ocr.extract(&upload.data, &title).await.map_err(|e| {
        if matches!(e, claro_core::Error::InvalidInput(_)) {
            return e.into();
        }
        error!(error = %e, "Image OCR failed");
        ApiError::Internal("Failed to OCR image".to_string())
    })?;

    let text = raw.trim().to_string();
    let note = if text.is_empty() {
        Some("No text recognised.".to_string())
    } else {
        Some("Extracted from image using OCR.".to_string())
    };

    let record = state
        .store
        .create(NewDocument {
            title: Some(title),
            kind: DocumentKind::Image,
            text,
            note,
            size_bytes: Some(size_bytes),
        })
        .await;

    Ok(Json(DocumentEnvelope {
        document: DocumentResponse::full(&record),
    }))
}
