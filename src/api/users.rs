//! User management endpoints (admin only)

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        page::PageParams,
        user::{User, UserQuery},
    },
};

use super::{AuthenticatedUser, ListResponse};

/// List users with search and pagination
///
/// Password hashes never leave the server; the field is stripped by
/// serialization.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(UserQuery),
    responses(
        (status = 200, description = "Page of users", body = ListResponse<User>),
        (status = 401, description = "Not authenticated", body = crate::error::GuardResponse),
        (status = 403, description = "Admin privileges required", body = crate::error::GuardResponse)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<ListResponse<User>>> {
    claims.require_admin()?;

    let pages = PageParams::from_query(query.page, query.limit);
    let (data, total) = state.services.auth.search_users(&query, pages).await?;

    Ok(Json(ListResponse {
        data,
        total,
        page: pages.page,
        total_pages: pages.total_pages(total),
    }))
}
