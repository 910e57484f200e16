use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use thiserror::Error;

use crate::domain::log::errors::LogRepositoryError;
use crate::inbound::http::validation::ValidationError;

/// Message returned to clients for every server-side fault.
pub const SERVER_ERROR_MESSAGE: &str =
    "An error occurred processing your request. Please, try again!";

/// Framework-independent request handed to a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

/// Framework-independent response produced by a controller.
///
/// `diagnostic` holds the failure trace of a 500 response. It is never sent to
/// the client.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: Value,
    pub diagnostic: Option<String>,
}

impl HttpResponse {
    pub fn new(status_code: StatusCode, body: Value) -> Self {
        Self {
            status_code,
            body,
            diagnostic: None,
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Fault raised by a controller wrapper after the wrapped controller answered.
#[derive(Debug, Clone, Error)]
pub enum ControllerError {
    #[error("{0}")]
    LogPersistence(#[from] LogRepositoryError),
}

/// Handles one endpoint.
///
/// Endpoint controllers convert every failure into a response and always
/// return `Ok`. Only decorators return `Err`.
#[async_trait]
pub trait Controller: Send + Sync + 'static {
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, ControllerError>;
}

pub fn ok(body: Value) -> HttpResponse {
    HttpResponse::new(StatusCode::OK, body)
}

pub fn bad_request(error: &ValidationError) -> HttpResponse {
    HttpResponse::new(
        StatusCode::BAD_REQUEST,
        json!({
            "error": error.to_string(),
            "field": error.field(),
            "kind": error.kind(),
        }),
    )
}

pub fn unauthorized() -> HttpResponse {
    HttpResponse::new(StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }))
}

/// Generic 500 carrying the failure and its cause chain as diagnostic.
pub fn server_error(error: anyhow::Error) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: json!({ "error": SERVER_ERROR_MESSAGE }),
        diagnostic: Some(format!("{:?}", error)),
    }
}
