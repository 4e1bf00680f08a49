//! API handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::error::Error;
use crate::types::{AskRequest, AskResponse, MachineRecord};

/// Liveness probe
pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// List all machine records
pub async fn list_machines(
    State(state): State<AppState>,
) -> Result<Json<Vec<MachineRecord>>, ApiError> {
    let machines = state.repository.list().await?;
    Ok(Json(machines))
}

/// Stubbed question answering; echoes the question in a fixed template.
/// The body is validated explicitly so a missing or non-string `question`
/// produces a structured 422 naming the field.
pub async fn ask_ai(Json(payload): Json<serde_json::Value>) -> Result<Json<AskResponse>, ApiError> {
    let request = AskRequest::from_value(&payload)?;

    let answer = format!(
        "This is a placeholder answer to your question: '{}'.",
        request.question
    );

    Ok(Json(AskResponse { answer }))
}

/// JSON error response carrying the HTTP status and, for validation
/// failures, the offending field.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    field: Option<String>,
}

impl ApiError {
    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            field: None,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidField { field, reason } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: format!("invalid field '{}': {}", field, reason),
                field: Some(field),
            },
            other => Self::internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "error": self.message,
        });
        if let Some(field) = self.field {
            body["field"] = serde_json::Value::String(field);
        }
        (self.status, Json(body)).into_response()
    }
}
