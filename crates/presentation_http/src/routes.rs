//! Route definitions

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
///
/// Request tracing and request ids are attached here; CORS depends on
/// configuration and is added by the binary.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // JSON API
        .route("/api/bus", get(handlers::api::bus_arrivals))
        .route("/api/tranvia/paradas", get(handlers::api::tram_stop_list))
        .route("/api/tranvia/tiempos", get(handlers::api::tram_arrivals))
        // HTML fragments
        .route("/fragments/bus", get(handlers::fragments::bus_arrivals))
        .route(
            "/fragments/tranvia/paradas",
            get(handlers::fragments::tram_stop_list),
        )
        .route(
            "/fragments/tranvia/tiempos",
            get(handlers::fragments::tram_arrivals),
        )
        // Attach state
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}
