use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::courier::{Courier, CourierPatch, CourierSummary, NewCourier};
use crate::pagination::PageRequest;
use crate::repo::CourierRepo;

const COURIER_COLUMNS: &str = "id_courier AS id, user_id, name, surname, ready_to_go, \
     phone_number, email, rating, photo, number_of_failures, deleted, delivery_service_id";

pub struct PgCourierRepo {
    pool: PgPool,
}

impl PgCourierRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourierRepo for PgCourierRepo {
    async fn create(&self, courier: &NewCourier) -> Result<Courier, AppError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO couriers (user_id, name, ready_to_go, phone_number, email, photo, surname, delivery_service_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id_courier",
        )
        .bind(courier.user_id)
        .bind(&courier.name)
        .bind(courier.ready_to_go)
        .bind(&courier.phone_number)
        .bind(&courier.email)
        .bind(&courier.photo)
        .bind(&courier.surname)
        .bind(courier.delivery_service_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Courier {
            id,
            user_id: courier.user_id,
            name: courier.name.clone(),
            surname: courier.surname.clone(),
            ready_to_go: courier.ready_to_go,
            phone_number: courier.phone_number.clone(),
            email: courier.email.clone(),
            rating: 0,
            photo: courier.photo.clone(),
            number_of_failures: 0,
            deleted: false,
            delivery_service_id: courier.delivery_service_id,
        })
    }

    async fn list_summaries(&self) -> Result<Vec<CourierSummary>, AppError> {
        let couriers = sqlx::query_as::<_, CourierSummary>(
            "SELECT id_courier AS id, name, phone_number, photo, surname, deleted \
             FROM couriers ORDER BY surname",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(couriers)
    }

    async fn by_user_id(&self, user_id: i32) -> Result<Option<Courier>, AppError> {
        let courier = sqlx::query_as::<_, Courier>(&format!(
            "SELECT {COURIER_COLUMNS} FROM couriers WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(courier)
    }

    async fn update(&self, id: i32, patch: CourierPatch) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Courier>(&format!(
            "SELECT {COURIER_COLUMNS} FROM couriers WHERE id_courier = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("courier {id} not found")))?;

        let merged = current.merged(patch);

        sqlx::query(
            "UPDATE couriers SET name = $1, surname = $2, delivery_service_id = $3, email = $4, \
             photo = $5, phone_number = $6, deleted = $7 WHERE id_courier = $8",
        )
        .bind(&merged.name)
        .bind(&merged.surname)
        .bind(merged.delivery_service_id)
        .bind(&merged.email)
        .bind(&merged.photo)
        .bind(&merged.phone_number)
        .bind(merged.deleted)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn by_service_page(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<(Vec<Courier>, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        let couriers = sqlx::query_as::<_, Courier>(&format!(
            "SELECT {COURIER_COLUMNS} FROM couriers WHERE delivery_service_id = $1 \
             ORDER BY surname LIMIT $2 OFFSET $3"
        ))
        .bind(service_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;

        let total: i64 =
            sqlx::query_scalar("SELECT count(*) FROM couriers WHERE delivery_service_id = $1")
                .bind(service_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok((couriers, total))
    }
}
