//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes for the ledger
//! - Request extractors with uniform rejections
//! - The `{message}` error envelope

pub mod error;
pub mod extractors;
pub mod routes;

use axum::Router;
use axum::http::Method;
use dompet_core::ledger::LedgerService;
use dompet_db::TransactionRepository;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Wraps an open connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Ledger service over the shared pool.
    #[must_use]
    pub fn ledger(&self) -> LedgerService<TransactionRepository> {
        LedgerService::new(TransactionRepository::new((*self.db).clone()))
    }
}

/// Creates the main application router.
///
/// `index_file` is served at `/`.
pub fn create_router(state: AppState, index_file: &str) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(index_file))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any),
        )
        .with_state(state)
}
