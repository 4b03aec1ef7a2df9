use std::sync::Arc;

use crate::error::AppError;
use crate::models::courier::{Courier, CourierPatch, CourierSummary, NewCourier};
use crate::pagination::PageRequest;
use crate::repo::CourierRepo;
use crate::storage::ObjectStore;

#[derive(Clone)]
pub struct CourierService {
    repo: Arc<dyn CourierRepo>,
    store: Arc<dyn ObjectStore>,
}

impl CourierService {
    pub fn new(repo: Arc<dyn CourierRepo>, store: Arc<dyn ObjectStore>) -> Self {
        Self { repo, store }
    }

    pub async fn list(&self) -> Result<Vec<CourierSummary>, AppError> {
        self.repo.list_summaries().await
    }

    pub async fn get(&self, user_id: i32) -> Result<Courier, AppError> {
        if user_id == 0 {
            return Err(AppError::BadRequest("id cannot be zero".to_string()));
        }
        let courier = self
            .repo
            .by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no courier for user {user_id}")))?;
        if courier.deleted {
            return Err(AppError::NotFound("account deleted".to_string()));
        }
        Ok(courier)
    }

    pub async fn create(&self, courier: NewCourier) -> Result<Courier, AppError> {
        if courier.name.trim().is_empty() {
            return Err(AppError::BadRequest("courier name is required".to_string()));
        }
        self.repo.create(&courier).await
    }

    pub async fn update(&self, id: i32, patch: CourierPatch) -> Result<(), AppError> {
        if id == 0 {
            return Err(AppError::BadRequest("id cannot be zero".to_string()));
        }
        self.repo.update(id, patch).await
    }

    pub async fn upload_photo(&self, id: i32, bytes: Vec<u8>) -> Result<(), AppError> {
        let url = self
            .store
            .put_object(&format!("courier_photo/{id}"), bytes)
            .await?;
        self.repo
            .update(
                id,
                CourierPatch {
                    photo: url,
                    ..CourierPatch::default()
                },
            )
            .await
    }

    pub async fn by_service_page(
        &self,
        page: PageRequest,
        service_id: i32,
    ) -> Result<Vec<Courier>, AppError> {
        let (couriers, total) = self.repo.by_service_page(page, service_id).await?;
        page.ensure_contains(total)?;
        Ok(couriers)
    }
}
