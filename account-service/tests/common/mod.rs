use std::sync::Arc;

use account_service::factories::make_login_controller;
use account_service::factories::make_signup_controller;
use account_service::inbound::http::router::create_router;
use account_service::outbound::cryptography::Argon2Adapter;
use account_service::outbound::cryptography::JwtAdapter;
use account_service::outbound::repositories::InMemoryAccountRepository;
use account_service::outbound::repositories::InMemoryLogErrorRepository;
use account_service::outbound::validators::EmailValidatorAdapter;
use credentials::TokenSigner;

const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory repositories
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub accounts: InMemoryAccountRepository,
    pub error_log: InMemoryLogErrorRepository,
    pub token_signer: TokenSigner,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let accounts = InMemoryAccountRepository::new();
        let error_log = InMemoryLogErrorRepository::new();

        let account_repository = Arc::new(accounts.clone());
        let log_error_repository = Arc::new(error_log.clone());
        let argon2 = Arc::new(Argon2Adapter::new());
        let email_validator = Arc::new(EmailValidatorAdapter::new());
        let jwt = Arc::new(JwtAdapter::new(TokenSigner::new(JWT_SECRET, 24)));

        let signup_controller = make_signup_controller(
            Arc::clone(&argon2),
            Arc::clone(&account_repository),
            Arc::clone(&email_validator),
            Arc::clone(&log_error_repository),
        );
        let login_controller = make_login_controller(
            account_repository,
            argon2,
            jwt,
            email_validator,
            log_error_repository,
        );

        let router = create_router(Arc::new(signup_controller), Arc::new(login_controller));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            accounts,
            error_log,
            token_signer: TokenSigner::new(JWT_SECRET, 24),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Register an account and return the response body
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> serde_json::Value {
        self.post("/api/signup")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
                "passwordConfirmation": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response")
    }
}
