//! Inventory endpoints (warehouse stock)

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{
        inventory::{InventoryItem, InventoryQuery},
        page::PageParams,
    },
};

use super::{AuthenticatedUser, ListResponse};

/// List inventory items with search and pagination
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    params(InventoryQuery),
    responses(
        (status = 200, description = "Page of inventory items", body = ListResponse<InventoryItem>),
        (status = 401, description = "Not authenticated", body = crate::error::GuardResponse)
    )
)]
pub async fn list_inventory(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<ListResponse<InventoryItem>>> {
    let pages = PageParams::from_query(query.page, query.limit);
    let (data, total) = state.services.inventory.search(&query, pages).await?;

    Ok(Json(ListResponse {
        data,
        total,
        page: pages.page,
        total_pages: pages.total_pages(total),
    }))
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecordParams {
    /// Exact display name, matched case-insensitively
    pub name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct InventoryRecordResponse {
    pub success: bool,
    pub item: Option<InventoryItem>,
}

/// Look up a single inventory item by name
///
/// A miss is a 200 with `success: false`, not an error.
#[utoipa::path(
    get,
    path = "/inventory/record",
    tag = "inventory",
    params(RecordParams),
    responses(
        (status = 200, description = "Lookup result", body = InventoryRecordResponse),
        (status = 401, description = "Not authenticated", body = crate::error::GuardResponse)
    )
)]
pub async fn get_record(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(params): Query<RecordParams>,
) -> AppResult<Json<InventoryRecordResponse>> {
    let item = match params.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => state.services.inventory.find_by_name(name).await?,
        None => None,
    };

    Ok(Json(InventoryRecordResponse {
        success: item.is_some(),
        item,
    }))
}
