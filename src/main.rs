//! Bookly Server - book catalog REST API

use std::net::SocketAddr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use bookly_server::{config::LoggingConfig, create_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing; the guard must outlive the server to flush file logs
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting Bookly Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Book lookup mode: {:?}, duplicate ids allowed: {}",
        config.books.lookup,
        config.books.allow_duplicate_ids
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state with a seeded catalog
    let state = AppState::new(config);

    // Build router
    let app = create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookly_server={},tower_http=debug", logging.level).into());

    let stdout = if logging.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let (file, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "bookly-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(file)
        .init();

    guard
}
