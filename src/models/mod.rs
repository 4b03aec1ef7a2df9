pub mod courier;
pub mod delivery_service;
pub mod order;
