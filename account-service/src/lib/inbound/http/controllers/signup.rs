use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::account::models::Account;
use crate::domain::account::models::AddAccountCommand;
use crate::domain::account::ports::AddAccount;
use crate::inbound::http::controller::bad_request;
use crate::inbound::http::controller::ok;
use crate::inbound::http::controller::server_error;
use crate::inbound::http::controller::Controller;
use crate::inbound::http::controller::ControllerError;
use crate::inbound::http::controller::HttpRequest;
use crate::inbound::http::controller::HttpResponse;
use crate::inbound::http::validation::text_field;
use crate::inbound::http::validation::Validation;
use crate::inbound::http::validation::ValidationError;

/// `POST /api/signup`
pub struct SignUpController<A, V>
where
    A: AddAccount,
    V: Validation,
{
    add_account: Arc<A>,
    validation: V,
}

impl<A, V> SignUpController<A, V>
where
    A: AddAccount,
    V: Validation,
{
    pub fn new(add_account: Arc<A>, validation: V) -> Self {
        Self {
            add_account,
            validation,
        }
    }

    async fn sign_up(&self, body: &Value) -> anyhow::Result<HttpResponse> {
        if let Some(error) = self
            .validation
            .validate(body)
            .context("Failed to validate sign up request")?
        {
            tracing::debug!(field = error.field(), kind = error.kind(), "Sign up rejected");
            return Ok(bad_request(&error));
        }

        let command = match parse_command(body) {
            Ok(command) => command,
            Err(error) => return Ok(bad_request(&error)),
        };

        let account = self
            .add_account
            .add(command)
            .await
            .context("Failed to add account")?;

        let data = serde_json::to_value(AccountResponseData::from(&account))
            .context("Failed to serialize account")?;

        Ok(ok(data))
    }
}

#[async_trait]
impl<A, V> Controller for SignUpController<A, V>
where
    A: AddAccount,
    V: Validation,
{
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, ControllerError> {
        Ok(self
            .sign_up(&request.body)
            .await
            .unwrap_or_else(server_error))
    }
}

fn parse_command(body: &Value) -> Result<AddAccountCommand, ValidationError> {
    Ok(AddAccountCommand::new(
        text_field(body, "name")?,
        text_field(body, "email")?,
        text_field(body, "password")?,
    ))
}

/// Account as returned to the client. `password` is the stored hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl From<&Account> for AccountResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name.clone(),
            email: account.email.clone(),
            password: account.password.clone(),
            access_token: account.access_token.clone(),
        }
    }
}
