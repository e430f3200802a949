//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api` plus `/health`
//! - Bearer-token authentication middleware
//! - Mapping from domain errors to JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;


use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use moneymatic_core::budget::{BudgetAnalyticsService, SystemClock};
use moneymatic_db::SeaOrmAnalyticsStore;
use moneymatic_shared::JwtService;

/// Budget analytics backed by the database and the wall clock.
pub type AnalyticsService = BudgetAnalyticsService<SeaOrmAnalyticsStore, SystemClock>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Budget report aggregator.
    pub analytics: Arc<AnalyticsService>,
}

impl AppState {
    /// Wires the services around one connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection, jwt_service: JwtService) -> Self {
        let store = SeaOrmAnalyticsStore::new(db.clone());
        let analytics = BudgetAnalyticsService::new(Arc::new(store), Arc::new(SystemClock));

        Self {
            db: Arc::new(db),
            jwt_service: Arc::new(jwt_service),
            analytics: Arc::new(analytics),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
