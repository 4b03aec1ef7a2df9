use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::models::delivery_service::DeliveryService;
use crate::models::order::IncomingOrder;
use crate::state::AppState;

pub mod pb {
    tonic::include_proto!("courier");
}

use pb::courier_server_server::CourierServer;

pub struct OrderIntake {
    state: Arc<AppState>,
}

impl OrderIntake {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

fn service_to_proto(service: DeliveryService) -> pb::DeliveryService {
    pb::DeliveryService {
        id: service.id,
        name: service.name,
        email: service.email,
        photo: service.photo,
        description: service.description,
        phone: service.phone_number,
        manager_id: service.manager_id,
        status: service.status,
    }
}

#[tonic::async_trait]
impl CourierServer for OrderIntake {
    async fn create_order(
        &self,
        request: Request<pb::OrderCourierServer>,
    ) -> Result<Response<()>, Status> {
        let order = request.into_inner();

        let incoming = IncomingOrder {
            delivery_service_id: order.courier_service_id,
            customer_address: order.client_address,
            restaurant_address: order.restaurant_address,
            restaurant_name: order.restaurant_name,
            id_from_restaurant: order.order_id,
            customer_name: order.client_full_name,
            customer_phone: order.client_phone_number,
            payment_type: order.payment_type,
        };

        self.state
            .orders
            .create_intake(incoming)
            .await
            .map_err(|err| Status::internal(format!("create order: {err}")))?;

        self.state.metrics.intake_orders_total.inc();
        Ok(Response::new(()))
    }

    async fn get_delivery_services_list(
        &self,
        _request: Request<()>,
    ) -> Result<Response<pb::ServicesResponse>, Status> {
        let services = self
            .state
            .services
            .all()
            .await
            .map_err(|err| Status::internal(format!("list services: {err}")))?;

        Ok(Response::new(pb::ServicesResponse {
            services: services.into_iter().map(service_to_proto).collect(),
        }))
    }
}
