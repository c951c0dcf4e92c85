//! Banking admin API server
//!
//! Startup errors are `anyhow`; request errors are `bank::BankError`
//! rendered as problem documents.

mod config;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use bank::{SqliteBankRepository, bank_router, ensure_default_admin};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;

    let repo = SqliteBankRepository::connect(&config.database_url).await?;
    tracing::info!(database_url = %config.database_url, "Connected to database");

    prepare_store(&repo, config.bank.pepper()).await;

    let app = Router::new()
        .nest("/api", bank_router(repo, config.bank))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,bank=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Migrate, seed the default administrator and purge expired sessions.
///
/// Failures are logged; the server starts regardless.
async fn prepare_store(repo: &SqliteBankRepository, pepper: Option<&[u8]>) {
    if let Err(e) = repo.migrate().await {
        tracing::error!(error = %e, "Migrations failed, continuing anyway");
    }

    if let Err(e) = ensure_default_admin(repo, pepper).await {
        tracing::error!(error = %e, "Default administrator bootstrap failed");
    }

    match repo.cleanup_expired().await {
        Ok(sessions_deleted) => tracing::info!(sessions_deleted, "Expired sessions purged"),
        Err(e) => tracing::warn!(error = %e, "Session cleanup failed, continuing anyway"),
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // Credentials are required for the session cookie
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
