use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use axum::Router;
use serde_json::json;

use crate::api::rest::{require_id, ListResponse};
use crate::auth::Identity;
use crate::error::AppError;
use crate::models::delivery_service::{DeliveryService, DeliveryServicePatch, NewDeliveryService};
use crate::state::AppState;

const MANAGEMENT_ROLES: &[&str] = &["Superadmin", "Courier manager"];
const READ_ROLES: &[&str] = &["Superadmin", "Courier", "Courier manager"];
const SUPERADMIN_ONLY: &[&str] = &["Superadmin"];

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/deliveryservice", post(create_service).get(list_services))
        .route("/deliveryservice/logo", post(upload_logo))
        .route("/deliveryservice/:id", get(get_service).put(update_service))
}

async fn create_service(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<NewDeliveryService>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.authorize(MANAGEMENT_ROLES, &identity)?;
    let id = state.services.create(payload).await?;
    Ok(Json(json!({ "id": id })))
}

async fn get_service(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
) -> Result<Json<DeliveryService>, AppError> {
    state.authorize(READ_ROLES, &identity)?;
    Ok(Json(state.services.get(id).await?))
}

async fn list_services(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<ListResponse<DeliveryService>>, AppError> {
    state.authorize(SUPERADMIN_ONLY, &identity)?;
    let services = state.services.list().await?;
    Ok(Json(ListResponse { data: services }))
}

async fn update_service(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
    Json(payload): Json<DeliveryServicePatch>,
) -> Result<StatusCode, AppError> {
    state.authorize(MANAGEMENT_ROLES, &identity)?;
    state.services.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn upload_logo(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    state.authorize(MANAGEMENT_ROLES, &identity)?;
    let id = require_id(&params, "id")?;
    if body.is_empty() {
        return Err(AppError::BadRequest("empty".to_string()));
    }
    state.services.upload_logo(id, body.to_vec()).await?;
    Ok(StatusCode::NO_CONTENT)
}
