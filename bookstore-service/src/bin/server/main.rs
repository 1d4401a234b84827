use std::sync::Arc;

use auth::Authenticator;
use bookstore_service::book::ports::BookServicePort;
use bookstore_service::config::Config;
use bookstore_service::domain::book::service::BookService;
use bookstore_service::domain::user::service::AuthService;
use bookstore_service::inbound::http::router::create_router;
use bookstore_service::outbound::repositories::PostgresBookRepository;
use bookstore_service::outbound::repositories::PostgresUserRepository;
use bookstore_service::user::ports::AuthServicePort;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "bookstore-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The database URL stays out of the logs; it can embed credentials
    tracing::info!(
        http_port = config.server.http_port,
        static_dir = %config.server.static_dir,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

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

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let book_repository = Arc::new(PostgresBookRepository::new(pg_pool));

    let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&authenticator),
        config.jwt.expiration_hours,
    ));
    let book_service: Arc<dyn BookServicePort> = Arc::new(BookService::new(book_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        book_service,
        Arc::clone(&authenticator),
        &config.server.static_dir,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
