//! Persistence layer for the review catalog.
//!
//! - [`models`]: row structs and create DTOs, one module per entity.
//! - [`repositories`]: zero-sized repos issuing one statement per method.
//! - [`catalog`]: the request-scoped access component that turns repository
//!   misses into [`CoreError::NotFound`](reviewhub_core::error::CoreError).

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod catalog;
pub mod models;
pub mod repositories;

pub use catalog::{Catalog, CatalogError, CatalogResult};

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist yet. Foreign key
/// enforcement is switched on for every pooled connection.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
