//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for menu logic. Request counting and latency live in the router
//! middleware; handlers only touch the domain counters.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    Coffee, CoffeeId, CoffeeInput, CoffeeListResponse, HealthResponse, MessageResponse,
    OrderInput, OrderResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the menu
/// storage is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let menu_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        menu: menu_status,
    }))
}

// =============================================================================
// Coffee CRUD
// =============================================================================

/// GET /coffees
///
/// List all coffees on the menu.
pub async fn list_coffees(State(state): State<AppState>) -> HandlerResult<CoffeeListResponse> {
    let coffees = services::list_coffees(state.repository.as_ref()).await?;
    let total = coffees.len();

    Ok(Json(CoffeeListResponse { coffees, total }))
}

/// POST /coffees
///
/// Add a coffee to the menu. Returns the stored coffee, including its
/// assigned id, with status 201.
pub async fn create_coffee(
    State(state): State<AppState>,
    payload: Result<Json<CoffeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Coffee>), AppError> {
    let Json(input) = payload.map_err(bad_request)?;

    let coffee = services::add_coffee(state.repository.as_ref(), &input).await?;
    state.metrics.coffees_created.inc();

    Ok((StatusCode::CREATED, Json(coffee)))
}

/// GET /coffees/{coffee_id}
///
/// Fetch a single coffee by id.
pub async fn get_coffee(
    State(state): State<AppState>,
    Path(coffee_id): Path<i64>,
) -> HandlerResult<Coffee> {
    let coffee = services::get_coffee(state.repository.as_ref(), CoffeeId::new(coffee_id)).await?;
    Ok(Json(coffee))
}

/// PUT /coffees/{coffee_id}
///
/// Replace the name and price of an existing coffee.
pub async fn update_coffee(
    State(state): State<AppState>,
    Path(coffee_id): Path<i64>,
    payload: Result<Json<CoffeeInput>, JsonRejection>,
) -> HandlerResult<Coffee> {
    let Json(input) = payload.map_err(bad_request)?;

    let coffee =
        services::update_coffee(state.repository.as_ref(), CoffeeId::new(coffee_id), &input)
            .await?;
    Ok(Json(coffee))
}

/// DELETE /coffees/{coffee_id}
///
/// Remove a coffee from the menu.
pub async fn delete_coffee(
    State(state): State<AppState>,
    Path(coffee_id): Path<i64>,
) -> HandlerResult<MessageResponse> {
    services::delete_coffee(state.repository.as_ref(), CoffeeId::new(coffee_id)).await?;
    state.metrics.coffees_deleted.inc();

    Ok(Json(MessageResponse {
        message: "Coffee deleted".to_string(),
    }))
}

// =============================================================================
// Orders
// =============================================================================

/// POST /order
///
/// Place an order for an existing coffee. The order is confirmed but not
/// persisted.
pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderInput>, JsonRejection>,
) -> HandlerResult<OrderResponse> {
    let Json(order) = payload.map_err(bad_request)?;

    let coffee = services::place_order(state.repository.as_ref(), &order).await?;
    state.metrics.orders_placed.inc();

    Ok(Json(OrderResponse {
        message: format!("Order placed for {}", coffee.name),
        coffee_id: coffee.id,
    }))
}

// =============================================================================
// Metrics
// =============================================================================

/// GET /metrics
///
/// Render every registered metric in the Prometheus text exposition format.
pub async fn metrics(State(state): State<AppState>) -> Response {
    // Menu size is computed at scrape time. If the repository is
    // unreachable the last recorded value stands.
    if let Ok(coffees) = state.repository.list_coffees().await {
        state.metrics.menu_size.set(coffees.len() as i64);
    }

    let extra = [("cafe_uptime_seconds", state.uptime_seconds())];
    let body = state.metrics.render(&extra);

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
        .into_response()
}

/// Map a body rejection (malformed JSON, missing fields, wrong types) to a
/// 400 response instead of axum's default status.
fn bad_request(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}
