use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::config::StorageConfig;
use crate::error::AppError;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, bytes: Vec<u8>) -> Result<String, AppError>;
}

/// Thin client for an S3-compatible object store. Request signing is left to
/// the storage gateway; this client only uploads and returns the public URL.
pub struct SpacesStore {
    http: reqwest::Client,
    endpoint: String,
    bucket: String,
    access_key: String,
    secret_key: String,
}

impl SpacesStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            bucket: config.bucket.clone(),
            access_key: config.access_key.clone(),
            secret_key: config.secret_key.clone(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("https://{}.{}/{}", self.bucket, self.endpoint, key)
    }
}

#[async_trait]
impl ObjectStore for SpacesStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let url = self.object_url(key);

        let response = self
            .http
            .put(&url)
            .basic_auth(&self.access_key, Some(&self.secret_key))
            .header(CONTENT_TYPE, "image/jpeg")
            .header("x-amz-acl", "public-read")
            .body(bytes)
            .send()
            .await
            .map_err(|err| AppError::Storage(format!("put {key}: {err}")))?;

        if !response.status().is_success() {
            return Err(AppError::Storage(format!(
                "put {key}: unexpected status {}",
                response.status()
            )));
        }

        tracing::info!(key, url = %url, "object uploaded");
        Ok(url)
    }
}
