use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::delivery_service::{DeliveryService, DeliveryServicePatch, NewDeliveryService};
use crate::repo::DeliveryServiceRepo;
use crate::storage::ObjectStore;

#[derive(Clone)]
pub struct DeliveryServices {
    repo: Arc<dyn DeliveryServiceRepo>,
    store: Arc<dyn ObjectStore>,
}

impl DeliveryServices {
    pub fn new(repo: Arc<dyn DeliveryServiceRepo>, store: Arc<dyn ObjectStore>) -> Self {
        Self { repo, store }
    }

    pub async fn create(&self, service: NewDeliveryService) -> Result<i32, AppError> {
        if service.name.is_empty() || service.email.is_empty() {
            return Err(AppError::BadRequest("empty fields".to_string()));
        }
        self.repo.create(&service).await
    }

    pub async fn get(&self, id: i32) -> Result<DeliveryService, AppError> {
        if id == 0 {
            return Err(AppError::BadRequest("id cannot be zero".to_string()));
        }
        let mut service = self
            .repo
            .by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("delivery service {id} not found")))?;
        if service.is_inactive() {
            return Err(AppError::NotFound(format!(
                "delivery service {id} is inactive"
            )));
        }
        service.num_of_couriers = self.repo.courier_count(id).await?;
        Ok(service)
    }

    pub async fn list(&self) -> Result<Vec<DeliveryService>, AppError> {
        let mut services = self.repo.list().await?;
        let counts: HashMap<i32, i64> = self.repo.courier_counts().await?.into_iter().collect();
        for service in &mut services {
            service.num_of_couriers = counts.get(&service.id).copied().unwrap_or(0);
        }
        Ok(services)
    }

    /// Plain listing without courier counts, used by the intake RPC.
    pub async fn all(&self) -> Result<Vec<DeliveryService>, AppError> {
        self.repo.list().await
    }

    pub async fn update(&self, id: i32, patch: DeliveryServicePatch) -> Result<(), AppError> {
        if id == 0 {
            return Err(AppError::BadRequest("id cannot be zero".to_string()));
        }
        self.repo.update(id, patch).await
    }

    pub async fn upload_logo(&self, id: i32, bytes: Vec<u8>) -> Result<(), AppError> {
        let url = self
            .store
            .put_object(&format!("logo_img/{id}"), bytes)
            .await?;
        self.repo
            .update(
                id,
                DeliveryServicePatch {
                    photo: url,
                    ..DeliveryServicePatch::default()
                },
            )
            .await
    }
}
