pub mod client;

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: i32,
    pub role: String,
    pub permissions: String,
}

#[async_trait]
pub trait TokenResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Identity, AppError>;
}

pub async fn require_identity(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let token = bearer_token(header).inspect_err(|_| {
        state.metrics.auth_failures_total.inc();
    })?;

    let identity = state.auth.resolve(token).await.inspect_err(|_| {
        state.metrics.auth_failures_total.inc();
    })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

fn bearer_token(header: &str) -> Result<&str, AppError> {
    if header.is_empty() {
        return Err(AppError::Unauthorized("empty auth header".to_string()));
    }
    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AppError::Unauthorized("invalid auth header".to_string()));
    }
    if parts[1].is_empty() {
        return Err(AppError::Unauthorized("token is empty".to_string()));
    }
    Ok(parts[1])
}
