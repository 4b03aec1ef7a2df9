use async_trait::async_trait;
use tonic::transport::Channel;

use crate::auth::{Identity, TokenResolver};
use crate::config::AuthConfig;
use crate::error::AppError;

pub mod pb {
    tonic::include_proto!("auth");
}

use pb::auth_client::AuthClient;

/// Client side of the external authentication service. Only
/// `GetUserWithRights` is consumed here; the remaining methods of the `Auth`
/// contract (role binding, token generation, role listing) belong to other
/// parties and are never called by this service.
pub struct GrpcTokenResolver {
    client: AuthClient<Channel>,
}

impl GrpcTokenResolver {
    pub fn connect(config: &AuthConfig) -> Result<Self, AppError> {
        let endpoint = Channel::from_shared(format!("http://{}:{}", config.host, config.port))
            .map_err(|err| AppError::Internal(format!("invalid auth endpoint: {err}")))?;
        Ok(Self {
            client: AuthClient::new(endpoint.connect_lazy()),
        })
    }
}

#[async_trait]
impl TokenResolver for GrpcTokenResolver {
    async fn resolve(&self, token: &str) -> Result<Identity, AppError> {
        let mut client = self.client.clone();
        let user = client
            .get_user_with_rights(pb::AccessToken {
                access_token: token.to_string(),
            })
            .await
            .map_err(|status| AppError::Unauthorized(status.message().to_string()))?
            .into_inner();

        Ok(Identity {
            user_id: user.user_id,
            role: user.role,
            permissions: user.permissions,
        })
    }
}
