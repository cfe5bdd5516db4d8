//! Zaragoza transit HTTP server
//!
//! Main entry point for the JSON API and HTML fragment server.

use std::future::IntoFuture;
use std::sync::Arc;

use application::{ArrivalsService, UpstreamEndpoints};
use axum::http::{HeaderValue, Method};
use infrastructure::{AppConfig, FragmentRenderer, LogFormat, ZaragozaFetchAdapter};
use presentation_http::shutdown::{self, ShutdownOutcome};
use presentation_http::{routes, state::AppState};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "info,zgz_transit_server=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log format can be applied
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(config.server.log_format);

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!("🚋 zgz-transit v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.upstream.base_url,
        max_attempts = config.upstream.max_attempts,
        "Configuration loaded"
    );

    // Initialize upstream adapter and services
    let upstream = ZaragozaFetchAdapter::new(&config.upstream)?;
    let endpoints =
        UpstreamEndpoints::new(&config.upstream.base_url, config.upstream.stop_list_rows)?;
    let arrivals = ArrivalsService::new(Arc::new(upstream), endpoints);

    let state = AppState {
        arrivals: Arc::new(arrivals),
        renderer: FragmentRenderer::new()?,
    };

    let app = routes::create_router(state).layer(cors_layer(&config.server.allowed_origins));

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let signalled = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let signalled = Arc::clone(&signalled);
            async move {
                shutdown::wait_for_signal().await;
                signalled.notify_one();
            }
        })
        .into_future();

    match shutdown::serve_with_grace(
        server,
        signalled.notified(),
        config.server.shutdown_timeout(),
    )
    .await?
    {
        ShutdownOutcome::Graceful => {
            info!("👋 Server shutdown complete");
            Ok(())
        },
        ShutdownOutcome::GracePeriodElapsed => {
            warn!("Shutdown grace period elapsed, abandoning open connections");
            anyhow::bail!("forced shutdown after {:?}", config.server.shutdown_timeout())
        },
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Any origin when none are configured, otherwise only the listed ones
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
