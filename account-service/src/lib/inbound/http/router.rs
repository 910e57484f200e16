use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login;
use super::handlers::signup;
use crate::inbound::http::controller::Controller;

#[derive(Clone)]
pub struct AppState {
    pub signup_controller: Arc<dyn Controller>,
    pub login_controller: Arc<dyn Controller>,
}

pub fn create_router(
    signup_controller: Arc<dyn Controller>,
    login_controller: Arc<dyn Controller>,
) -> Router {
    let state = AppState {
        signup_controller,
        login_controller,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use serde_json::json;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::log::errors::LogRepositoryError;
    use crate::inbound::http::controller::ok;
    use crate::inbound::http::controller::ControllerError;
    use crate::inbound::http::controller::HttpRequest;
    use crate::inbound::http::controller::HttpResponse;

    /// Answers with the body it received.
    struct Echo;

    #[async_trait]
    impl Controller for Echo {
        async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, ControllerError> {
            Ok(ok(request.body))
        }
    }

    struct Broken;

    #[async_trait]
    impl Controller for Broken {
        async fn handle(&self, _request: HttpRequest) -> Result<HttpResponse, ControllerError> {
            Err(LogRepositoryError::PersistFailed("disk full".to_string()).into())
        }
    }

    fn post(uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method("POST").uri(uri);

        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn read_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_routes_body_to_controller() {
        let router = create_router(Arc::new(Echo), Arc::new(Broken));

        let response = router
            .oneshot(post("/api/signup", Some(json!({ "name": "Diego" }))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, json!({ "name": "Diego" }));
    }

    #[tokio::test]
    async fn test_missing_body_becomes_empty_object() {
        let router = create_router(Arc::new(Echo), Arc::new(Echo));

        let response = router.oneshot(post("/api/login", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, json!({}));
    }

    #[tokio::test]
    async fn test_controller_failure_is_generic_server_error() {
        let router = create_router(Arc::new(Echo), Arc::new(Broken));

        let response = router
            .oneshot(post("/api/login", Some(json!({}))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_body(response).await;
        assert_eq!(
            body["error"],
            crate::inbound::http::controller::SERVER_ERROR_MESSAGE
        );
        assert!(!body.to_string().contains("disk full"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let router = create_router(Arc::new(Echo), Arc::new(Echo));

        let response = router.oneshot(post("/api/accounts", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
