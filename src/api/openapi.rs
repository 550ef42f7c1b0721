//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, health, inventory, shops, users, vendors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AMN API",
        version = "0.1.0",
        description = "Asset Management Network REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::me,
        // Inventory
        inventory::list_inventory,
        inventory::get_record,
        // Shops
        shops::list_shops,
        shops::get_record,
        // Vendors
        vendors::list_vendors,
        // Users
        users::list_users,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::LogoutResponse,
            // Inventory
            crate::models::inventory::InventoryItem,
            inventory::InventoryRecordResponse,
            // Shops
            crate::models::shop::Shop,
            crate::models::shop::ShopStatus,
            shops::ShopRecordResponse,
            // Vendors
            crate::models::vendor::Vendor,
            // Users
            crate::models::user::User,
            crate::models::user::Role,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::GuardResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "inventory", description = "Warehouse inventory search"),
        (name = "shops", description = "Shop directory"),
        (name = "vendors", description = "Vendor directory"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
