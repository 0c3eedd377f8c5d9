//! Database layer with `SeaORM` entities and the ledger repository.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - The `LedgerStore` implementation over an embedded SQLite file
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::TransactionRepository;

use dompet_shared::{AppError, config::DatabaseConfig};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use migration::Migrator;

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(config.sqlx_logging);

    Database::connect(options).await
}

/// Connects and brings the schema up to date.
///
/// # Errors
///
/// Returns `AppError::Startup` if the store cannot be opened or migrated.
pub async fn open(config: &DatabaseConfig) -> Result<DatabaseConnection, AppError> {
    let db = connect(config)
        .await
        .map_err(|e| AppError::Startup(format!("failed to open database: {e}")))?;

    Migrator::up(&db, None)
        .await
        .map_err(|e| AppError::Startup(format!("failed to migrate database: {e}")))?;
    info!(url = %config.url, "Database schema up to date");

    Ok(db)
}
