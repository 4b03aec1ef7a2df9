use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_INACTIVE: &str = "inactive";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DeliveryService {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub photo: String,
    pub description: String,
    pub phone_number: String,
    pub manager_id: i32,
    pub status: String,
    #[serde(rename = "NumOfCouriers")]
    #[sqlx(default)]
    pub num_of_couriers: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDeliveryService {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub manager_id: i32,
    #[serde(default)]
    pub status: String,
}

/// Same merge rule as the courier patch: zero values keep the stored field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeliveryServicePatch {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub status: String,
}

impl DeliveryService {
    pub fn merged(mut self, patch: DeliveryServicePatch) -> DeliveryService {
        if !patch.name.is_empty() {
            self.name = patch.name;
        }
        if !patch.email.is_empty() {
            self.email = patch.email;
        }
        if !patch.photo.is_empty() {
            self.photo = patch.photo;
        }
        if !patch.description.is_empty() {
            self.description = patch.description;
        }
        if !patch.phone_number.is_empty() {
            self.phone_number = patch.phone_number;
        }
        if !patch.status.is_empty() {
            self.status = patch.status;
        }
        self
    }

    pub fn is_inactive(&self) -> bool {
        self.status == STATUS_INACTIVE
    }
}
