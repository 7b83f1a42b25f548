pub mod client_repository;
pub mod invoice_repository;

pub use client_repository::SqliteClientRepository;
pub use invoice_repository::SqliteInvoiceRepository;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::config::DatabaseConfig;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the pool described by the configuration, creating the database
/// file when it does not exist yet. Foreign keys are enforced on every
/// connection.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
  let options = SqliteConnectOptions::from_str(&config.url)?
    .create_if_missing(true)
    .foreign_keys(true);

  SqlitePoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
    .connect_with(options)
    .await
}

#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
  let options = SqliteConnectOptions::from_str("sqlite::memory:")
    .unwrap()
    .foreign_keys(true);

  // A single connection that never expires keeps the in-memory database alive
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connect_with(options)
    .await
    .unwrap();

  MIGRATOR.run(&pool).await.unwrap();
  pool
}
