use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::domain::log::ports::LogErrorRepository;
use crate::inbound::http::controller::Controller;
use crate::inbound::http::controller::ControllerError;
use crate::inbound::http::controller::HttpRequest;
use crate::inbound::http::controller::HttpResponse;

/// Wraps a controller and persists the diagnostic of every 500 it returns.
///
/// The response is handed back only after the diagnostic has been written.
/// Any other response passes through untouched.
pub struct LogControllerDecorator<C, L>
where
    C: Controller,
    L: LogErrorRepository,
{
    controller: C,
    log_error_repository: Arc<L>,
}

impl<C, L> LogControllerDecorator<C, L>
where
    C: Controller,
    L: LogErrorRepository,
{
    pub fn new(controller: C, log_error_repository: Arc<L>) -> Self {
        Self {
            controller,
            log_error_repository,
        }
    }
}

#[async_trait]
impl<C, L> Controller for LogControllerDecorator<C, L>
where
    C: Controller,
    L: LogErrorRepository,
{
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, ControllerError> {
        let response = self.controller.handle(request).await?;

        if response.status_code != StatusCode::INTERNAL_SERVER_ERROR {
            return Ok(response);
        }

        match response.diagnostic.as_deref() {
            Some(trace) => {
                tracing::error!(diagnostic = %trace, "Request failed");

                if let Err(e) = self.log_error_repository.log_error(trace).await {
                    tracing::error!(error = %e, "Failed to persist error log");
                    return Err(e.into());
                }
            }
            None => tracing::warn!("Server error response carries no diagnostic"),
        }

        Ok(response)
    }
}
