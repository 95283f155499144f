use std::sync::Arc;

use auth::Authenticator;
use reminder_service::config::Config;
use reminder_service::domain::reminder::service::ReminderService;
use reminder_service::domain::user::service::AccountService;
use reminder_service::inbound::http::router::create_router;
use reminder_service::outbound::gateways::GooglePlacesGateway;
use reminder_service::outbound::repositories::PostgresReminderRepository;
use reminder_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reminder_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "reminder-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Fails when the signing secret or the provider API key is missing.
    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let reminder_repository = Arc::new(PostgresReminderRepository::new(pg_pool));

    let account_service = Arc::new(AccountService::new(user_repository, authenticator));
    let reminder_service = Arc::new(ReminderService::new(reminder_repository));
    let places_gateway = Arc::new(GooglePlacesGateway::new(config.places.api_key.clone()));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(account_service, reminder_service, places_gateway);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
