use crate::config::ConfigError;
use crate::document::DispatchError;
use crate::mapping::ScheduleImportError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Everything the library and the service binaries can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
    #[error("schedule import error: {0}")]
    ScheduleImport(#[from] ScheduleImportError),
    #[error("invalid case data: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Caller mistakes surface as 4xx; everything else is ours.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Dispatch(_) => StatusCode::NOT_FOUND,
            Self::ScheduleImport(_) | Self::Json(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Telemetry(_) | Self::Io(_) | Self::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
