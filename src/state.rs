use std::sync::Arc;

use crate::access;
use crate::auth::{Identity, TokenResolver};
use crate::error::AppError;
use crate::observability::metrics::Metrics;
use crate::service::{CourierService, DeliveryServices, OrderService};

pub struct AppState {
    pub couriers: CourierService,
    pub services: DeliveryServices,
    pub orders: OrderService,
    pub auth: Arc<dyn TokenResolver>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        couriers: CourierService,
        services: DeliveryServices,
        orders: OrderService,
        auth: Arc<dyn TokenResolver>,
    ) -> Self {
        Self {
            couriers,
            services,
            orders,
            auth,
            metrics: Metrics::new(),
        }
    }

    pub fn authorize(&self, necessary: &[&str], identity: &Identity) -> Result<(), AppError> {
        access::check_role(necessary, &identity.role).inspect_err(|_| {
            self.metrics.role_denials_total.inc();
            tracing::warn!(role = %identity.role, "not enough rights");
        })
    }
}
