//! AMN Asset Management Network Server
//!
//! A Rust implementation of the AMN asset-management server, providing a
//! REST JSON API for warehouse inventory search, shop and vendor lookup,
//! and cookie-based session authentication.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/me", get(api::auth::me))
        // Inventory (warehouse stock)
        .route("/inventory", get(api::inventory::list_inventory))
        .route("/inventory/record", get(api::inventory::get_record))
        // Shops
        .route("/shops", get(api::shops::list_shops))
        .route("/shops/record", get(api::shops::get_record))
        // Vendors (admin only)
        .route("/vendors", get(api::vendors::list_vendors))
        // Users (admin only)
        .route("/users", get(api::users::list_users))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
