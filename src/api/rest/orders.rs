use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::Extension;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use serde_json::json;

use crate::api::rest::{page_request, require_id, ListResponse};
use crate::auth::Identity;
use crate::error::AppError;
use crate::models::order::{CompletedOrdersSort, DetailedOrder, Order, OrderFullDetails};
use crate::state::AppState;

const MANAGEMENT_ROLES: &[&str] = &["Superadmin", "Courier manager"];
const COURIER_ROLES: &[&str] = &["Superadmin", "Courier", "Courier manager"];

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(active_orders_of_service))
        .route("/orders/completed", get(completed_by_courier))
        .route("/orders/bymonth", get(completed_by_month))
        .route("/orders/service/completed", get(completed_by_service))
        .route("/orders/manager", get(manager_view))
        .route("/orders/:id", get(orders_of_courier).put(assign_courier))
        .route("/order/:id", get(get_order))
        .route("/order/detailed/:id", get(detailed_order))
        .route("/order/status_change/:id", put(change_status))
}

#[derive(Deserialize)]
struct StatusUpdate {
    status: String,
}

#[derive(Deserialize)]
struct AssignCourier {
    #[serde(default)]
    courier_id: i32,
}

async fn orders_of_courier(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Order>>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    Ok(Json(state.orders.active_orders(id).await?))
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
) -> Result<Json<Order>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    Ok(Json(state.orders.get(id).await?))
}

async fn detailed_order(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
) -> Result<Json<OrderFullDetails>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    if id <= 0 {
        return Err(AppError::BadRequest(
            "expect an integer greater than 0".to_string(),
        ));
    }
    Ok(Json(state.orders.detailed(id).await?))
}

async fn change_status(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    let order_id = state.orders.change_status(id, &payload.status).await?;
    Ok(Json(json!({ "Order id": order_id })))
}

async fn assign_courier(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i32>,
    Json(payload): Json<AssignCourier>,
) -> Result<StatusCode, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    state.orders.assign_courier(id, payload.courier_id).await?;
    state.metrics.orders_assigned_total.inc();
    Ok(StatusCode::NO_CONTENT)
}

async fn completed_by_courier(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<DetailedOrder>>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    let page = page_request(&params)?;
    let courier_id = require_id(&params, "idcourier")?;
    let orders = state.orders.completed_by_courier(page, courier_id).await?;
    Ok(Json(ListResponse { data: orders }))
}

async fn active_orders_of_service(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<DetailedOrder>>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    let page = page_request(&params)?;
    let service_id = require_id(&params, "iddeliveryservice")?;
    let orders = state.orders.active_by_service(page, service_id).await?;
    Ok(Json(ListResponse { data: orders }))
}

async fn completed_by_month(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Order>>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    let page = page_request(&params)?;
    let courier_id = require_id(&params, "idcourier")?;
    let month = require_id(&params, "month")?;
    let year = require_id(&params, "year")?;
    let orders = state
        .orders
        .completed_by_courier_month(page, courier_id, month, year)
        .await?;
    Ok(Json(ListResponse { data: orders }))
}

async fn completed_by_service(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Order>>, AppError> {
    state.authorize(COURIER_ROLES, &identity)?;
    let page = page_request(&params)?;
    let service_id = require_id(&params, "iddeliveryservice")?;
    let sort = CompletedOrdersSort::parse(params.get("sort").map(String::as_str));
    let orders = state
        .orders
        .completed_by_service(page, service_id, sort)
        .await?;
    Ok(Json(ListResponse { data: orders }))
}

async fn manager_view(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<DetailedOrder>>, AppError> {
    state.authorize(MANAGEMENT_ROLES, &identity)?;
    let page = page_request(&params)?;
    let service_id = require_id(&params, "iddeliveryservice")?;
    let orders = state.orders.manager_view(page, service_id).await?;
    Ok(Json(ListResponse { data: orders }))
}
