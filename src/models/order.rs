use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_READY_TO_DELIVERY: &str = "ready to delivery";
pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub delivery_service_id: i32,
    pub courier_id: i32,
    pub delivery_time: DateTime<Utc>,
    pub customer_address: String,
    pub status: String,
    pub order_date: DateTime<Utc>,
    pub restaurant_address: String,
    pub picked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DetailedOrder {
    #[serde(rename = "id")]
    pub id_order: i32,
    pub delivery_service_id: i32,
    pub courier_id: i32,
    pub delivery_time: DateTime<Utc>,
    pub customer_address: String,
    pub status: String,
    pub order_date: DateTime<Utc>,
    pub restaurant_address: String,
    pub picked: bool,
    #[serde(rename = "name")]
    pub courier_name: String,
    #[serde(rename = "surname")]
    pub courier_surname: String,
    #[serde(rename = "phone_number")]
    pub courier_phone_number: String,
    pub id_from_restaurant: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderFullDetails {
    #[serde(rename = "id")]
    pub id_order: i32,
    pub delivery_service_id: i32,
    pub courier_id: i32,
    pub delivery_time: DateTime<Utc>,
    pub customer_address: String,
    pub status: String,
    pub order_date: DateTime<Utc>,
    pub restaurant_address: String,
    pub restaurant_name: String,
    pub picked: bool,
    #[serde(rename = "name")]
    pub courier_name: String,
    #[serde(rename = "surname")]
    pub courier_surname: String,
    #[serde(rename = "phone_number")]
    pub courier_phone_number: String,
    pub id_from_restaurant: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub payment_type: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomingOrder {
    pub delivery_service_id: i32,
    pub customer_address: String,
    pub restaurant_address: String,
    pub restaurant_name: String,
    pub id_from_restaurant: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub payment_type: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletedOrdersSort {
    Date,
    Courier,
    Id,
}

impl CompletedOrdersSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("date") => CompletedOrdersSort::Date,
            Some("courier") => CompletedOrdersSort::Courier,
            _ => CompletedOrdersSort::Id,
        }
    }

    pub fn order_by_column(&self) -> &'static str {
        match self {
            CompletedOrdersSort::Date => "order_date",
            CompletedOrdersSort::Courier => "courier_id",
            CompletedOrdersSort::Id => "id",
        }
    }
}
