//! API handlers for AMN REST endpoints

pub mod auth;
pub mod health;
pub mod inventory;
pub mod openapi;
pub mod shops;
pub mod users;
pub mod vendors;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Session cookie carrying the signed token
pub const TOKEN_COOKIE: &str = "amn-token";
/// Session cookie exposing the caller's role to the UI
pub const ROLE_COOKIE: &str = "amn-role";
/// Session cookie exposing the caller's username to the UI
pub const USERNAME_COOKIE: &str = "amn-username";

/// Paginated list response wrapper
#[derive(Serialize, ToSchema)]
pub struct ListResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Records on the requested page
    pub data: Vec<T>,
    /// Total number of matching records
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Total page count for the predicate
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// Extractor for the authenticated caller, resolved from the session cookie
///
/// Handlers receive the claims as an explicit value; there is no ambient
/// session lookup. A missing or invalid token rejects the request before
/// the handler runs.
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthorized)?;

        let token = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(AppError::Unauthorized)?;

        let claims = UserClaims::from_token(&token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::Unauthorized)?;

        Ok(AuthenticatedUser(claims))
    }
}
