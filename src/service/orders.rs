use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::error::AppError;
use crate::models::order::{
    CompletedOrdersSort, DetailedOrder, IncomingOrder, Order, OrderFullDetails,
};
use crate::pagination::PageRequest;
use crate::repo::OrderRepo;

/// Promised delivery window for orders accepted through the intake RPC.
pub const DELIVERY_ESTIMATE_MINUTES: i64 = 45;

#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepo>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepo>) -> Self {
        Self { repo }
    }

    pub async fn active_orders(&self, courier_id: i32) -> Result<Vec<Order>, AppError> {
        if courier_id == 0 {
            return Err(AppError::BadRequest("id cannot be zero".to_string()));
        }
        self.repo.active_by_courier(courier_id).await
    }

    pub async fn get(&self, id: i32) -> Result<Order, AppError> {
        if id == 0 {
            return Err(AppError::BadRequest("id cannot be zero".to_string()));
        }
        self.repo
            .by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))
    }

    pub async fn change_status(&self, id: i32, status: &str) -> Result<i32, AppError> {
        self.get(id).await?;
        self.repo.set_status(id, status).await?;
        Ok(id)
    }

    pub async fn assign_courier(&self, order_id: i32, courier_id: i32) -> Result<(), AppError> {
        self.get(order_id).await?;
        self.repo.assign_courier(order_id, courier_id).await
    }

    pub async fn detailed(&self, id: i32) -> Result<OrderFullDetails, AppError> {
        let order = self
            .repo
            .detailed_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;
        Ok(order)
    }

    pub async fn completed_by_courier(
        &self,
        page: PageRequest,
        courier_id: i32,
    ) -> Result<Vec<DetailedOrder>, AppError> {
        let (orders, total) = self.repo.completed_by_courier_page(page, courier_id).await?;
        page.ensure_contains(total)?;
        Ok(orders)
    }

    pub async fn active_by_service(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<Vec<DetailedOrder>, AppError> {
        let (orders, total) = self.repo.active_by_service_page(page, service_id).await?;
        page.ensure_contains(total)?;
        Ok(orders)
    }

    pub async fn completed_by_courier_month(
        &self,
        page: PageRequest,
        courier_id: i32,
        month: i32,
        year: i32,
    ) -> Result<Vec<Order>, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::BadRequest(
                "expect an integer from 1 to 12".to_string(),
            ));
        }
        let (orders, total) = self
            .repo
            .completed_by_courier_month_page(page, courier_id, month, year)
            .await?;
        page.ensure_contains(total)?;
        Ok(orders)
    }

    pub async fn completed_by_service(
        &self,
        page: PageRequest,
        service_id: i32,
        sort: CompletedOrdersSort,
    ) -> Result<Vec<Order>, AppError> {
        let (orders, total) = self
            .repo
            .completed_by_service_page(page, service_id, sort)
            .await?;
        page.ensure_contains(total)?;
        Ok(orders)
    }

    pub async fn manager_view(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<Vec<DetailedOrder>, AppError> {
        let (orders, total) = self.repo.manager_page(page, service_id).await?;
        page.ensure_contains(total)?;
        Ok(orders)
    }

    pub async fn create_intake(&self, order: IncomingOrder) -> Result<(), AppError> {
        let order_date = Utc::now();
        let delivery_time = order_date + Duration::minutes(DELIVERY_ESTIMATE_MINUTES);
        self.repo
            .create_intake(&order, order_date, delivery_time)
            .await
    }
}
