use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

use crate::inbound::http::controller::Controller;
use crate::inbound::http::controller::HttpRequest;
use crate::inbound::http::controller::SERVER_ERROR_MESSAGE;
use crate::inbound::http::router::AppState;

pub async fn signup(State(state): State<AppState>, body: Option<Json<Value>>) -> Response {
    adapt(state.signup_controller.as_ref(), body).await
}

pub async fn login(State(state): State<AppState>, body: Option<Json<Value>>) -> Response {
    adapt(state.login_controller.as_ref(), body).await
}

/// Bridge between axum and a controller.
///
/// A missing or unparsable body is handed over as an empty object so the
/// controller's validation reports the missing fields.
async fn adapt(controller: &dyn Controller, body: Option<Json<Value>>) -> Response {
    let body = body
        .map(|Json(body)| body)
        .unwrap_or_else(|| Value::Object(Map::new()));

    match controller.handle(HttpRequest::new(body)).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Controller failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": SERVER_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}
