use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::order::{
    CompletedOrdersSort, DetailedOrder, IncomingOrder, Order, OrderFullDetails,
    STATUS_COMPLETED, STATUS_READY_TO_DELIVERY,
};
use crate::pagination::PageRequest;
use crate::repo::OrderRepo;

const ORDER_COLUMNS: &str = "id, delivery_service_id, courier_id, delivery_time, \
     customer_address, status, order_date, restaurant_address, picked";

const DETAILED_ORDER_COLUMNS: &str = "d.id AS id_order, d.delivery_service_id, d.courier_id, \
     d.delivery_time, d.customer_address, d.status, d.order_date, d.restaurant_address, \
     d.picked, co.name AS courier_name, co.surname AS courier_surname, \
     co.phone_number AS courier_phone_number, d.id_from_restaurant";

pub struct PgOrderRepo {
    pool: PgPool,
}

impl PgOrderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepo for PgOrderRepo {
    async fn active_by_courier(&self, courier_id: i32) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM delivery WHERE courier_id = $1 AND status = $2"
        ))
        .bind(courier_id)
        .bind(STATUS_READY_TO_DELIVERY)
        .fetch_all(&self.pool)
        .await?;
        Ok(orders)
    }

    async fn by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM delivery WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(order)
    }

    async fn set_status(&self, id: i32, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE delivery SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn assign_courier(&self, order_id: i32, courier_id: i32) -> Result<(), AppError> {
        sqlx::query("UPDATE delivery SET courier_id = $1 WHERE id = $2")
            .bind(courier_id)
            .bind(order_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create_intake(
        &self,
        order: &IncomingOrder,
        order_date: DateTime<Utc>,
        delivery_time: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO delivery (delivery_service_id, customer_address, order_date, \
             restaurant_address, delivery_time, restaurant_name, id_from_restaurant, \
             customer_name, payment_type, customer_phone) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(order.delivery_service_id)
        .bind(&order.customer_address)
        .bind(order_date)
        .bind(&order.restaurant_address)
        .bind(delivery_time)
        .bind(&order.restaurant_name)
        .bind(order.id_from_restaurant)
        .bind(&order.customer_name)
        .bind(order.payment_type)
        .bind(&order.customer_phone)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn detailed_by_id(&self, id: i32) -> Result<Option<OrderFullDetails>, AppError> {
        let order = sqlx::query_as::<_, OrderFullDetails>(&format!(
            "SELECT {DETAILED_ORDER_COLUMNS}, d.restaurant_name, d.customer_name, \
             d.customer_phone, d.payment_type \
             FROM delivery AS d JOIN couriers AS co ON co.id_courier = d.courier_id \
             WHERE d.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(order)
    }

    async fn completed_by_courier_page(
        &self,
        page: PageRequest,
        courier_id: i32,
    ) -> Result<(Vec<DetailedOrder>, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        let orders = sqlx::query_as::<_, DetailedOrder>(&format!(
            "SELECT {DETAILED_ORDER_COLUMNS} \
             FROM delivery AS d JOIN couriers AS co ON co.id_courier = d.courier_id \
             WHERE d.status = $1 AND d.courier_id = $2 ORDER BY d.id LIMIT $3 OFFSET $4"
        ))
        .bind(STATUS_COMPLETED)
        .bind(courier_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;

        let total: i64 =
            sqlx::query_scalar("SELECT count(*) FROM delivery WHERE status = $1 AND courier_id = $2")
                .bind(STATUS_COMPLETED)
                .bind(courier_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok((orders, total))
    }

    async fn active_by_service_page(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<(Vec<DetailedOrder>, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        let orders = sqlx::query_as::<_, DetailedOrder>(&format!(
            "SELECT {DETAILED_ORDER_COLUMNS} \
             FROM delivery AS d JOIN couriers AS co ON co.id_courier = d.courier_id \
             WHERE d.delivery_service_id = $1 AND d.status = $2 ORDER BY d.id LIMIT $3 OFFSET $4"
        ))
        .bind(service_id)
        .bind(STATUS_READY_TO_DELIVERY)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM delivery WHERE delivery_service_id = $1 AND status = $2",
        )
        .bind(service_id)
        .bind(STATUS_READY_TO_DELIVERY)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((orders, total))
    }

    async fn completed_by_courier_month_page(
        &self,
        page: PageRequest,
        courier_id: i32,
        month: i32,
        year: i32,
    ) -> Result<(Vec<Order>, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM delivery \
             WHERE status = $1 AND courier_id = $2 \
             AND EXTRACT(MONTH FROM order_date) = $3 AND EXTRACT(YEAR FROM order_date) = $4 \
             LIMIT $5 OFFSET $6"
        ))
        .bind(STATUS_COMPLETED)
        .bind(courier_id)
        .bind(month)
        .bind(year)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM delivery \
             WHERE status = $1 AND courier_id = $2 \
             AND EXTRACT(MONTH FROM order_date) = $3 AND EXTRACT(YEAR FROM order_date) = $4",
        )
        .bind(STATUS_COMPLETED)
        .bind(courier_id)
        .bind(month)
        .bind(year)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((orders, total))
    }

    async fn completed_by_service_page(
        &self,
        page: PageRequest,
        service_id: i32,
        sort: CompletedOrdersSort,
    ) -> Result<(Vec<Order>, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        // order_by_column is a fixed column name per sort variant, never user input
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM delivery \
             WHERE status = $1 AND delivery_service_id = $2 \
             ORDER BY {} LIMIT $3 OFFSET $4",
            sort.order_by_column()
        ))
        .bind(STATUS_COMPLETED)
        .bind(service_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM delivery WHERE status = $1 AND delivery_service_id = $2",
        )
        .bind(STATUS_COMPLETED)
        .bind(service_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((orders, total))
    }

    async fn manager_page(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<(Vec<DetailedOrder>, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        let orders = sqlx::query_as::<_, DetailedOrder>(&format!(
            "SELECT {DETAILED_ORDER_COLUMNS} \
             FROM delivery AS d JOIN couriers AS co ON co.id_courier = d.courier_id \
             WHERE d.delivery_service_id = $1 AND d.status != $2 ORDER BY d.id LIMIT $3 OFFSET $4"
        ))
        .bind(service_id)
        .bind(STATUS_COMPLETED)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM delivery WHERE delivery_service_id = $1 AND status != $2",
        )
        .bind(service_id)
        .bind(STATUS_COMPLETED)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((orders, total))
    }
}
