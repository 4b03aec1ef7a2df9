use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::AppError;

pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let ssl_mode = PgSslMode::from_str(&config.ssl_mode)
        .map_err(|err| AppError::Internal(format!("invalid DB_SSL_MODE: {err}")))?;

    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(ssl_mode);

    PgPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .map_err(|err| AppError::Db(format!("error connecting to database: {err}")))
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|err| AppError::Db(format!("migrations failed: {err}")))
}
