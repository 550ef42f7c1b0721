//! Vendor directory endpoints (admin only)

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        page::PageParams,
        vendor::{Vendor, VendorQuery},
    },
};

use super::{AuthenticatedUser, ListResponse};

/// List vendors with search and pagination
#[utoipa::path(
    get,
    path = "/vendors",
    tag = "vendors",
    params(VendorQuery),
    responses(
        (status = 200, description = "Page of vendors", body = ListResponse<Vendor>),
        (status = 401, description = "Not authenticated", body = crate::error::GuardResponse),
        (status = 403, description = "Admin privileges required", body = crate::error::GuardResponse)
    )
)]
pub async fn list_vendors(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<VendorQuery>,
) -> AppResult<Json<ListResponse<Vendor>>> {
    claims.require_admin()?;

    let pages = PageParams::from_query(query.page, query.limit);
    let (data, total) = state.services.vendors.search(&query, pages).await?;

    Ok(Json(ListResponse {
        data,
        total,
        page: pages.page,
        total_pages: pages.total_pages(total),
    }))
}
