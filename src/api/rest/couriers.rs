use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use axum::Router;

use crate::api::rest::{page_request, require_id, ListResponse};
use crate::auth::Identity;
use crate::error::AppError;
use crate::models::courier::{Courier, CourierPatch, CourierSummary, NewCourier};
use crate::state::AppState;

const MANAGEMENT_ROLES: &[&str] = &["Superadmin", "Courier manager"];
const COURIER_ROLES: &[&str] = &["Superadmin", "Courier", "Courier manager"];
const PATCH_ROLES: &[&str] = &["Superadmin", "Courier manager", "Courier"];

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/couriers", get(list_couriers))
        .route("/couriers/photo", post(upload_photo))
        .route("/couriers/service", get(couriers_of_service))
        .route("/courier", post(create_courier))
        .route("/courier/:id", get(get_courier).put(update_courier))
}

async fn list_couriers(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<CourierSummary>>, AppError> {
    state.authorize(MANAGEMENT_ROLES, &identity)?;
    Ok(Json(state.couriers.list().await?))
}

async fn get_courier(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
) -> Result<Json<Courier>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    Ok(Json(state.couriers.get(id).await?))
}

async fn create_courier(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<NewCourier>,
) -> Result<(StatusCode, Json<Courier>), AppError> {
    state.authorize(MANAGEMENT_ROLES, &identity)?;
    let created = state.couriers.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_courier(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
    Json(payload): Json<CourierPatch>,
) -> Result<StatusCode, AppError> {
    state.authorize(PATCH_ROLES, &identity)?;
    state.couriers.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn upload_photo(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    let id = require_id(&params, "id")?;
    if body.is_empty() {
        return Err(AppError::BadRequest("empty".to_string()));
    }
    state.couriers.upload_photo(id, body.to_vec()).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn couriers_of_service(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Courier>>, AppError> {
    state.authorize(MANAGEMENT_ROLES, &identity)?;
    let page = page_request(&params)?;
    let service_id = require_id(&params, "iddeliveryservice")?;
    let couriers = state.couriers.by_service_page(page, service_id).await?;
    Ok(Json(ListResponse { data: couriers }))
}
