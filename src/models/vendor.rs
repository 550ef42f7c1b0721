//! Vendor model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::models::page::lenient_i64;

/// Vendor directory entry
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Vendor {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub contact_email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Query parameters for the vendor list endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VendorQuery {
    /// Case-insensitive substring over name and code
    pub search: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}
