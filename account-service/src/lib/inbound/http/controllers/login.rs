use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;
use serde_json::Value;

use crate::domain::account::models::AuthenticationCommand;
use crate::domain::account::ports::Authentication;
use crate::inbound::http::controller::bad_request;
use crate::inbound::http::controller::ok;
use crate::inbound::http::controller::server_error;
use crate::inbound::http::controller::unauthorized;
use crate::inbound::http::controller::Controller;
use crate::inbound::http::controller::ControllerError;
use crate::inbound::http::controller::HttpRequest;
use crate::inbound::http::controller::HttpResponse;
use crate::inbound::http::validation::text_field;
use crate::inbound::http::validation::Validation;
use crate::inbound::http::validation::ValidationError;

/// `POST /api/login`
pub struct LoginController<A, V>
where
    A: Authentication,
    V: Validation,
{
    authentication: Arc<A>,
    validation: V,
}

impl<A, V> LoginController<A, V>
where
    A: Authentication,
    V: Validation,
{
    pub fn new(authentication: Arc<A>, validation: V) -> Self {
        Self {
            authentication,
            validation,
        }
    }

    async fn login(&self, body: &Value) -> anyhow::Result<HttpResponse> {
        if let Some(error) = self
            .validation
            .validate(body)
            .context("Failed to validate login request")?
        {
            tracing::debug!(field = error.field(), kind = error.kind(), "Login rejected");
            return Ok(bad_request(&error));
        }

        let command = match parse_command(body) {
            Ok(command) => command,
            Err(error) => return Ok(bad_request(&error)),
        };

        let access_token = self
            .authentication
            .auth(command)
            .await
            .context("Failed to authenticate")?;

        match access_token {
            Some(access_token) => Ok(ok(json!({ "accessToken": access_token }))),
            None => Ok(unauthorized()),
        }
    }
}

#[async_trait]
impl<A, V> Controller for LoginController<A, V>
where
    A: Authentication,
    V: Validation,
{
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, ControllerError> {
        Ok(self.login(&request.body).await.unwrap_or_else(server_error))
    }
}

fn parse_command(body: &Value) -> Result<AuthenticationCommand, ValidationError> {
    Ok(AuthenticationCommand::new(
        text_field(body, "email")?,
        text_field(body, "password")?,
    ))
}
