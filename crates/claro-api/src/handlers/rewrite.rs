//! Plain-language rewrite endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use claro_core::defaults::SENTENCE_MAX_CHARS;

use crate::ApiError;

use super::validate_length;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RewriteRequest {
    /// Sentence to simplify.
    pub sentence: Option<String>,
    /// Terms that must survive the rewrite verbatim.
    #[serde(default, rename = "keepTerms")]
    pub keep_terms: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RewriteResponse {
    pub candidates: Vec<String>,
}

/// Produce up to five plain-language candidates for a sentence.
#[utoipa::path(
    post,
    path = "/ai/rewrite",
    tag = "Rewrite",
    request_body = RewriteRequest,
    responses(
        (status = 200, description = "Rewrite candidates", body = RewriteResponse),
        (status = 400, description = "Missing or over-long sentence")
    )
)]
pub async fn rewrite_sentence(
    Json(payload): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, ApiError> {
    let sentence = payload
        .sentence
        .ok_or_else(|| ApiError::BadRequest("sentence is required".to_string()))?;
    validate_length("sentence", &sentence, 1, SENTENCE_MAX_CHARS)?;

    let candidates = claro_core::rewrite(&sentence, &payload.keep_terms);
    Ok(Json(RewriteResponse { candidates }))
}
