use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use probate_docs::document::{DocumentContent, DocumentKind};
use probate_docs::error::AppError;
use probate_docs::forms;
use probate_docs::mapping::CaseBundle;
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct DocumentKindView {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) form: Option<&'static str>,
}

impl From<DocumentKind> for DocumentKindView {
    fn from(kind: DocumentKind) -> Self {
        Self {
            id: kind.id(),
            label: kind.label(),
            form: kind.form_number(),
        }
    }
}

pub(crate) fn document_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/documents", get(list_documents))
        .route("/api/v1/documents/:kind", post(render_document))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_documents() -> Json<Vec<DocumentKindView>> {
    Json(
        DocumentKind::ordered()
            .into_iter()
            .map(DocumentKindView::from)
            .collect(),
    )
}

/// The kind is parsed before the bundle is mapped so an unknown id never
/// does any work.
pub(crate) async fn render_document(
    Extension(state): Extension<AppState>,
    Path(kind): Path<String>,
    Json(bundle): Json<CaseBundle>,
) -> Result<Json<DocumentContent>, AppError> {
    let kind: DocumentKind = kind.parse()?;
    let model = bundle.build(&state.documents);
    let document = forms::generate(kind, &model, &state.style);

    info!(
        kind = %kind,
        case = bundle.case.id.as_deref().unwrap_or(""),
        "document rendered"
    );

    Ok(Json(document))
}
