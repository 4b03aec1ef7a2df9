use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub auth_failures_total: IntCounter,
    pub role_denials_total: IntCounter,
    pub intake_orders_total: IntCounter,
    pub orders_assigned_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let auth_failures_total = IntCounter::new(
            "auth_failures_total",
            "Requests rejected before token resolution or by the auth service",
        )
        .expect("valid auth_failures_total metric");

        let role_denials_total = IntCounter::new(
            "role_denials_total",
            "Authenticated requests denied by the role gate",
        )
        .expect("valid role_denials_total metric");

        let intake_orders_total = IntCounter::new(
            "intake_orders_total",
            "Orders accepted through the intake RPC",
        )
        .expect("valid intake_orders_total metric");

        let orders_assigned_total = IntCounter::new(
            "orders_assigned_total",
            "Orders assigned to a courier over HTTP",
        )
        .expect("valid orders_assigned_total metric");

        registry
            .register(Box::new(auth_failures_total.clone()))
            .expect("register auth_failures_total");
        registry
            .register(Box::new(role_denials_total.clone()))
            .expect("register role_denials_total");
        registry
            .register(Box::new(intake_orders_total.clone()))
            .expect("register intake_orders_total");
        registry
            .register(Box::new(orders_assigned_total.clone()))
            .expect("register orders_assigned_total");

        Self {
            registry,
            auth_failures_total,
            role_denials_total,
            intake_orders_total,
            orders_assigned_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
