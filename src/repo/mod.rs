pub mod couriers;
pub mod delivery_services;
pub mod orders;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::courier::{Courier, CourierPatch, CourierSummary, NewCourier};
use crate::models::delivery_service::{DeliveryService, DeliveryServicePatch, NewDeliveryService};
use crate::models::order::{
    CompletedOrdersSort, DetailedOrder, IncomingOrder, Order, OrderFullDetails,
};
use crate::pagination::PageRequest;

pub use couriers::PgCourierRepo;
pub use delivery_services::PgDeliveryServiceRepo;
pub use orders::PgOrderRepo;

#[async_trait]
pub trait CourierRepo: Send + Sync {
    async fn create(&self, courier: &NewCourier) -> Result<Courier, AppError>;
    async fn list_summaries(&self) -> Result<Vec<CourierSummary>, AppError>;
    async fn by_user_id(&self, user_id: i32) -> Result<Option<Courier>, AppError>;
    async fn update(&self, id: i32, patch: CourierPatch) -> Result<(), AppError>;
    async fn by_service_page(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<(Vec<Courier>, i64), AppError>;
}

#[async_trait]
pub trait DeliveryServiceRepo: Send + Sync {
    async fn create(&self, service: &NewDeliveryService) -> Result<i32, AppError>;
    async fn by_id(&self, id: i32) -> Result<Option<DeliveryService>, AppError>;
    async fn list(&self) -> Result<Vec<DeliveryService>, AppError>;
    async fn update(&self, id: i32, patch: DeliveryServicePatch) -> Result<(), AppError>;
    async fn courier_count(&self, id: i32) -> Result<i64, AppError>;
    async fn courier_counts(&self) -> Result<Vec<(i32, i64)>, AppError>;
}

#[async_trait]
pub trait OrderRepo: Send + Sync {
    async fn active_by_courier(&self, courier_id: i32) -> Result<Vec<Order>, AppError>;
    async fn by_id(&self, id: i32) -> Result<Option<Order>, AppError>;
    async fn set_status(&self, id: i32, status: &str) -> Result<(), AppError>;
    async fn assign_courier(&self, order_id: i32, courier_id: i32) -> Result<(), AppError>;
    async fn create_intake(
        &self,
        order: &IncomingOrder,
        order_date: DateTime<Utc>,
        delivery_time: DateTime<Utc>,
    ) -> Result<(), AppError>;
    async fn detailed_by_id(&self, id: i32) -> Result<Option<OrderFullDetails>, AppError>;
    async fn completed_by_courier_page(
        &self,
        page: PageRequest,
        courier_id: i32,
    ) -> Result<(Vec<DetailedOrder>, i64), AppError>;
    async fn active_by_service_page(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<(Vec<DetailedOrder>, i64), AppError>;
    async fn completed_by_courier_month_page(
        &self,
        page: PageRequest,
        courier_id: i32,
        month: i32,
        year: i32,
    ) -> Result<(Vec<Order>, i64), AppError>;
    async fn completed_by_service_page(
        &self,
        page: PageRequest,
        service_id: i32,
        sort: CompletedOrdersSort,
    ) -> Result<(Vec<Order>, i64), AppError>;
    async fn manager_page(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<(Vec<DetailedOrder>, i64), AppError>;
}
