//! Router assembly: routes, middleware stack, and OpenAPI wiring.

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use claro_core::defaults::CORS_MAX_AGE_SECS;

use crate::handlers::{documents, rewrite, system, uploads};
use crate::AppState;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically. That keeps
/// log correlation straightforward when grepping across requests.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// OpenAPI documentation, served at `/openapi.json` with Swagger UI at `/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Claro API",
        description = "Plain-language document library: store text, pull it out of PDFs and images, and simplify sentences"
    ),
    paths(
        system::health_check,
        rewrite::rewrite_sentence,
        documents::create_text_document,
        documents::list_documents,
        documents::get_document,
        documents::delete_document,
        uploads::upload_pdf,
        uploads::upload_image,
    ),
    components(schemas(
        claro_core::DocumentKind,
        claro_core::DocumentResponse,
        documents::CreateTextDocumentRequest,
        documents::DocumentEnvelope,
        documents::DocumentListResponse,
        rewrite::RewriteRequest,
        rewrite::RewriteResponse,
    )),
    tags(
        (name = "System", description = "Health checks"),
        (name = "Rewrite", description = "Plain-language sentence rewriting"),
        (name = "Documents", description = "Document storage and retrieval"),
        (name = "Uploads", description = "PDF and image text extraction")
    )
)]
struct ApiDoc;

/// Parse allowed origins from the comma-separated `ALLOWED_ORIGIN` env var.
///
/// Returns `None` when unset, empty, or `*`, meaning any origin is allowed.
fn parse_allowed_origins() -> Option<Vec<HeaderValue>> {
    let origins_str = std::env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string());

    if origins_str.trim().is_empty() || origins_str.trim() == "*" {
        return None;
    }

    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect();

    // All entries unparseable is treated like unset rather than lock-out
    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}

fn cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(CORS_MAX_AGE_SECS));

    match parse_allowed_origins() {
        Some(origins) => base.allow_origin(AllowOrigin::list(origins)),
        None => base.allow_origin(Any),
    }
}

async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    // If rate limiting is disabled, pass through
    if let Some(limiter) = &state.rate_limiter {
        if limiter.check().is_err() {
            tracing::warn!("Rate limit exceeded");
            return Err((
                StatusCode::TOO_MANY_REQUESTS,
                Json(serde_json::json!({
                    "error": "rate_limit_exceeded",
                    "error_description": "Too many requests. Please wait before retrying."
                })),
            ));
        }
    }
    Ok(next.run(request).await)
}

/// Assemble the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        // Health check
        .route("/health", get(system::health_check))
        // OpenAPI / Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        // Rewrite
        .route("/ai/rewrite", post(rewrite::rewrite_sentence))
        // Documents
        .route("/documents/text", post(documents::create_text_document))
        .route("/documents", get(documents::list_documents))
        .route(
            "/documents/:id",
            get(documents::get_document).delete(documents::delete_document),
        )
        // Uploads
        .route("/upload/pdf", post(uploads::upload_pdf))
        .route("/upload/image", post(uploads::upload_image))
        // Middleware
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer())
        // Multipart reads go through axum's body limit as well
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .with_state(state)
}
