//! Inventory item model (warehouse stock)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::models::page::lenient_i64;

/// A stocked item with its warehouse location
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct InventoryItem {
    pub id: i32,
    /// Display name; lookups by name are case-insensitive
    pub name: String,
    pub code: Option<String>,
    pub category: Option<String>,
    /// Warehouse shelf/zone
    pub location: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Query parameters for the inventory list endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryQuery {
    /// Case-insensitive substring over name, code and category
    pub search: Option<String>,
    /// Exact category filter (case-insensitive)
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}
