//! Replenishment Reports Platform - Backend Server
//!
//! Serves supply-needs and items-needed reports for purchasing staff.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use replenishment_backend::{
    create_app,
    services::{NoticeSink, ReportService, SilentNoticeSink, TracingNoticeSink},
    store::PgShortfallSource,
    AppState, Config,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let json_logs = config.log_format == "json";
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "replenishment_server=debug,replenishment_backend=debug,tower_http=debug,sqlx=warn"
                    .into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting Replenishment Reports Server");
    tracing::info!("Environment: {}", config.environment);

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;

    tracing::info!("Database connection established");

    // Apply the development schema when asked to
    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&db_pool).await?;
        tracing::info!("Migrations completed");
    }

    let source = PgShortfallSource::new(db_pool.clone(), config.database.tables.clone());
    let notices: Arc<dyn NoticeSink> = if config.reports.notify_duplicates {
        Arc::new(TracingNoticeSink)
    } else {
        Arc::new(SilentNoticeSink)
    };

    // Create application state
    let state = AppState {
        db: db_pool,
        reports: ReportService::new(Arc::new(source)),
        notices,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
