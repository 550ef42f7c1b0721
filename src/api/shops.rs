//! Shop directory endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{
        page::PageParams,
        shop::{Shop, ShopQuery},
    },
};

use super::{AuthenticatedUser, ListResponse};

/// List shops with search and pagination
#[utoipa::path(
    get,
    path = "/shops",
    tag = "shops",
    params(ShopQuery),
    responses(
        (status = 200, description = "Page of shops", body = ListResponse<Shop>),
        (status = 401, description = "Not authenticated", body = crate::error::GuardResponse)
    )
)]
pub async fn list_shops(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ShopQuery>,
) -> AppResult<Json<ListResponse<Shop>>> {
    let pages = PageParams::from_query(query.page, query.limit);
    let (data, total) = state.services.shops.search(&query, pages).await?;

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
    /// Exact shop name, matched case-insensitively
    pub name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ShopRecordResponse {
    pub success: bool,
    pub shop: Option<Shop>,
}

/// Look up a single shop by name
#[utoipa::path(
    get,
    path = "/shops/record",
    tag = "shops",
    params(RecordParams),
    responses(
        (status = 200, description = "Lookup result", body = ShopRecordResponse),
        (status = 401, description = "Not authenticated", body = crate::error::GuardResponse)
    )
)]
pub async fn get_record(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(params): Query<RecordParams>,
) -> AppResult<Json<ShopRecordResponse>> {
    let shop = match params.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => state.services.shops.find_by_name(name).await?,
        None => None,
    };

    Ok(Json(ShopRecordResponse {
        success: shop.is_some(),
        shop,
    }))
}
