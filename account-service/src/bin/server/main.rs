use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::account::ports::AccountRepository;
use account_service::domain::log::ports::LogErrorRepository;
use account_service::factories::make_login_controller;
use account_service::factories::make_signup_controller;
use account_service::inbound::http::controller::Controller;
use account_service::inbound::http::router::create_router;
use account_service::outbound::cryptography::Argon2Adapter;
use account_service::outbound::cryptography::JwtAdapter;
use account_service::outbound::repositories::InMemoryAccountRepository;
use account_service::outbound::repositories::InMemoryLogErrorRepository;
use account_service::outbound::repositories::PostgresAccountRepository;
use account_service::outbound::repositories::PostgresLogErrorRepository;
use account_service::outbound::validators::EmailValidatorAdapter;
use credentials::TokenSigner;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        in_memory = config.database.is_in_memory(),
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let (signup_controller, login_controller) = if config.database.is_in_memory() {
        tracing::warn!(database = "memory", "Using in-memory repositories, data is not persisted");

        build_controllers(
            &config,
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(InMemoryLogErrorRepository::new()),
        )
    } else {
        let pg_pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;
        tracing::info!(
            max_connections = config.database.max_connections,
            database = "postgresql",
            "Database connection pool created"
        );

        sqlx::migrate!("./migrations").run(&pg_pool).await?;
        tracing::info!(database = "postgresql", "Database migrations completed");

        build_controllers(
            &config,
            Arc::new(PostgresAccountRepository::new(pg_pool.clone())),
            Arc::new(PostgresLogErrorRepository::new(pg_pool)),
        )
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(signup_controller, login_controller);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

fn build_controllers<AR, L>(
    config: &Config,
    account_repository: Arc<AR>,
    log_error_repository: Arc<L>,
) -> (Arc<dyn Controller>, Arc<dyn Controller>)
where
    AR: AccountRepository,
    L: LogErrorRepository,
{
    let argon2 = Arc::new(Argon2Adapter::new());
    let jwt = Arc::new(JwtAdapter::new(TokenSigner::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    )));
    let email_validator = Arc::new(EmailValidatorAdapter::new());

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

    (Arc::new(signup_controller), Arc::new(login_controller))
}
