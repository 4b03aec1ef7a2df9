use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::delivery_service::{DeliveryService, DeliveryServicePatch, NewDeliveryService};
use crate::repo::DeliveryServiceRepo;

const SERVICE_COLUMNS: &str =
    "id, name, email, photo, description, phone_number, manager_id, status";

pub struct PgDeliveryServiceRepo {
    pool: PgPool,
}

impl PgDeliveryServiceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeliveryServiceRepo for PgDeliveryServiceRepo {
    async fn create(&self, service: &NewDeliveryService) -> Result<i32, AppError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO delivery_service (name, email, photo, description, phone_number, manager_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(&service.name)
        .bind(&service.email)
        .bind(&service.photo)
        .bind(&service.description)
        .bind(&service.phone_number)
        .bind(service.manager_id)
        .bind(&service.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn by_id(&self, id: i32) -> Result<Option<DeliveryService>, AppError> {
        let service = sqlx::query_as::<_, DeliveryService>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM delivery_service WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(service)
    }

    async fn list(&self) -> Result<Vec<DeliveryService>, AppError> {
        let services = sqlx::query_as::<_, DeliveryService>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM delivery_service ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(services)
    }

    async fn update(&self, id: i32, patch: DeliveryServicePatch) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, DeliveryService>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM delivery_service WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("delivery service {id} not found")))?;

        let merged = current.merged(patch);

        sqlx::query(
            "UPDATE delivery_service SET name = $1, email = $2, description = $3, \
             phone_number = $4, status = $5, photo = $6 WHERE id = $7",
        )
        .bind(&merged.name)
        .bind(&merged.email)
        .bind(&merged.description)
        .bind(&merged.phone_number)
        .bind(&merged.status)
        .bind(&merged.photo)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn courier_count(&self, id: i32) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM couriers AS co \
             JOIN delivery_service AS d ON co.delivery_service_id = d.id WHERE d.id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn courier_counts(&self) -> Result<Vec<(i32, i64)>, AppError> {
        let counts = sqlx::query_as::<_, (i32, i64)>(
            "SELECT delivery_service_id, count(*) FROM couriers GROUP BY delivery_service_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }
}
