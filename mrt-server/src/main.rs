use mrt_server::config::ServerConfig;
use mrt_server::upstream::UpstreamClient;
use mrt_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let upstream = UpstreamClient::new(config.upstream.clone())
        .expect("Failed to create upstream client");

    let app = create_router(AppState::new(upstream));

    info!(
        addr = %config.listen_addr,
        stations_url = %config.upstream.stations_url,
        schedules_url = %config.upstream.schedules_url,
        timeout_secs = config.upstream.timeout_secs,
        "MRT schedule server listening"
    );
    info!("  GET /health                       - Health check");
    info!("  GET /v1/api/station               - List stations");
    info!("  GET /v1/api/station/:id/schedule  - Upcoming departures");

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            error!("failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
