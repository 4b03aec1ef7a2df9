pub mod couriers;
pub mod delivery_services;
pub mod orders;

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_identity;
use crate::error::AppError;
use crate::pagination::PageRequest;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .merge(couriers::router())
        .merge(delivery_services::router())
        .merge(orders::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ));

    Router::new()
        .merge(protected)
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err).into_response(),
    }
}

fn require_positive(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<i64, AppError> {
    params
        .get(name)
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|value| *value > 0)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "{name} query param is wrong. Expected an integer greater than 0"
            ))
        })
}

pub(crate) fn require_id(params: &HashMap<String, String>, name: &str) -> Result<i32, AppError> {
    params
        .get(name)
        .and_then(|raw| raw.parse::<i32>().ok())
        .filter(|value| *value > 0)
        .ok_or_else(|| AppError::BadRequest("expect an integer greater than 0".to_string()))
}

pub(crate) fn page_request(params: &HashMap<String, String>) -> Result<PageRequest, AppError> {
    let page = require_positive(params, "page")?;
    let limit = require_positive(params, "limit")?;
    PageRequest::new(page, limit)
}
