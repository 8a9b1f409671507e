use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCipher;
use finance_service::config::Config;
use finance_service::domain::auth::service::AuthService;
use finance_service::domain::transaction::service::TransactionService;
use finance_service::inbound::http::router::create_router;
use finance_service::outbound::repositories::PostgresTransactionRepository;
use finance_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "finance_service={level},tower_http={level}",
                    level = config.log.level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "finance-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        min_connections = config.database.min_connections,
        token_validity_hours = config.token.validity_hours,
        "Configuration loaded"
    );

    let token_cipher = Arc::new(
        TokenCipher::from_base64_key(&config.token.symmetric_key)
            .map_err(|e| anyhow::anyhow!("token.symmetric_key: {}", e))?,
    );
    let password_hasher = Arc::new(
        PasswordHasher::with_params(
            config.password.memory_cost_kib,
            config.password.iterations,
            config.password.parallelism,
        )
        .map_err(|e| anyhow::anyhow!("password hashing parameters: {}", e))?,
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let transaction_repository = Arc::new(PostgresTransactionRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_cipher,
        password_hasher,
        config.token.validity()?,
    )?);
    let transaction_service = Arc::new(TransactionService::new(transaction_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, transaction_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
