//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, the request-tracking middleware, and the
//! CORS/tracing layers, and creates the axum router ready for serving.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        // Coffee CRUD
        .route(
            "/coffees",
            get(handlers::list_coffees).post(handlers::create_coffee),
        )
        .route(
            "/coffees/{coffee_id}",
            get(handlers::get_coffee)
                .put(handlers::update_coffee)
                .delete(handlers::delete_coffee),
        )
        // Orders
        .route("/order", post(handlers::place_order))
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Record count and latency for every request except `/metrics` scrapes,
/// which would otherwise count themselves.
async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    // The route template, so /coffees/1 and /coffees/2 share a series
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    if path != "/metrics" {
        let status = response.status().as_u16().to_string();
        state.metrics.http_requests.inc(&[
            ("method", method.as_str()),
            ("path", &path),
            ("status", &status),
        ]);
        state.metrics.request_duration.observe(
            &[("method", method.as_str()), ("path", &path)],
            started.elapsed(),
        );
    }

    response
}
