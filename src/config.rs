use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub grpc_port: u16,
    pub log_level: String,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: String,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("API_SERVER_PORT", 8080)?,
            grpc_port: parse_or_default("GRPC_PORT", 8091)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            database: DatabaseConfig {
                host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: parse_or_default("DB_PORT", 5432)?,
                user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                password: env::var("DB_PASSWORD").unwrap_or_default(),
                name: env::var("DB_DATABASE").unwrap_or_else(|_| "courier_service".to_string()),
                ssl_mode: env::var("DB_SSL_MODE").unwrap_or_else(|_| "disable".to_string()),
            },
            auth: AuthConfig {
                host: env::var("AUTH_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: parse_or_default("AUTH_PORT", 8090)?,
            },
            storage: StorageConfig {
                endpoint: env::var("STORAGE_ENDPOINT")
                    .unwrap_or_else(|_| "fra1.digitaloceanspaces.com".to_string()),
                bucket: env::var("STORAGE_BUCKET")
                    .unwrap_or_else(|_| "storage-like-s3".to_string()),
                access_key: env::var("ACCESS_KEY").unwrap_or_default(),
                secret_key: env::var("SECRET_KEY").unwrap_or_default(),
            },
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
