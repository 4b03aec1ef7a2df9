mod access;
mod api;
mod auth;
mod config;
mod db;
mod error;
mod models;
mod observability;
mod pagination;
mod repo;
mod service;
mod state;
mod storage;

use std::sync::Arc;

use tonic::transport::Server as TonicServer;
use tracing_subscriber::EnvFilter;

use crate::api::grpc::pb::courier_server_server::CourierServerServer;
use crate::api::grpc::OrderIntake;
use crate::auth::client::GrpcTokenResolver;
use crate::repo::{PgCourierRepo, PgDeliveryServiceRepo, PgOrderRepo};
use crate::service::{CourierService, DeliveryServices, OrderService};
use crate::storage::{ObjectStore, SpacesStore};

#[tokio::main]
async fn main() -> Result<(), error::AppError> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let pool = db::connect(&config.database).await?;
    db::run_migrations(&pool).await?;

    let auth = Arc::new(GrpcTokenResolver::connect(&config.auth)?);
    let store: Arc<dyn ObjectStore> = Arc::new(SpacesStore::new(&config.storage));

    let couriers = CourierService::new(Arc::new(PgCourierRepo::new(pool.clone())), store.clone());
    let services = DeliveryServices::new(
        Arc::new(PgDeliveryServiceRepo::new(pool.clone())),
        store.clone(),
    );
    let orders = OrderService::new(Arc::new(PgOrderRepo::new(pool.clone())));

    let shared_state = Arc::new(state::AppState::new(couriers, services, orders, auth));

    let app = api::rest::router(shared_state.clone());

    let grpc_addr = format!("0.0.0.0:{}", config.grpc_port)
        .parse()
        .map_err(|err| error::AppError::Internal(format!("invalid grpc address: {err}")))?;
    let intake = OrderIntake::new(shared_state.clone());

    tokio::spawn(async move {
        tracing::info!(grpc_port = %grpc_addr, "grpc server started");
        if let Err(err) = TonicServer::builder()
            .add_service(CourierServerServer::new(intake))
            .serve(grpc_addr)
            .await
        {
            tracing::error!(error = %err, "grpc server failed");
        }
    });

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| error::AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port = config.http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| error::AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
