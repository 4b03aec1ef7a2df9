use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Courier {
    #[serde(rename = "id_courier")]
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "courier_name")]
    pub name: String,
    pub surname: String,
    pub ready_to_go: bool,
    pub phone_number: String,
    pub email: String,
    pub rating: i32,
    pub photo: String,
    pub number_of_failures: i32,
    pub deleted: bool,
    pub delivery_service_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CourierSummary {
    #[serde(rename = "id_courier")]
    pub id: i32,
    #[serde(rename = "courier_name")]
    pub name: String,
    pub phone_number: String,
    pub photo: String,
    pub surname: String,
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCourier {
    #[serde(default)]
    pub user_id: i32,
    #[serde(rename = "courier_name")]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub ready_to_go: bool,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub delivery_service_id: i32,
}

/// Zero-valued fields leave the stored value untouched; a field can
/// therefore never be cleared through this path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourierPatch {
    #[serde(default, rename = "courier_name")]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub delivery_service_id: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub deleted: bool,
}

impl Courier {
    pub fn merged(mut self, patch: CourierPatch) -> Courier {
        if !patch.name.is_empty() {
            self.name = patch.name;
        }
        if !patch.surname.is_empty() {
            self.surname = patch.surname;
        }
        if patch.delivery_service_id != 0 {
            self.delivery_service_id = patch.delivery_service_id;
        }
        if !patch.email.is_empty() {
            self.email = patch.email;
        }
        if !patch.photo.is_empty() {
            self.photo = patch.photo;
        }
        if !patch.phone_number.is_empty() {
            self.phone_number = patch.phone_number;
        }
        if patch.deleted {
            self.deleted = true;
        }
        self
    }
}
