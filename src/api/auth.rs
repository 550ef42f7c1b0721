//! Authentication endpoints

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use time::Duration;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

use super::{AuthenticatedUser, ROLE_COOKIE, TOKEN_COOKIE, USERNAME_COOKIE};

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// The authenticated user; the password field is stripped by
    /// serialization
    pub user: User,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

/// Log in with username and password
///
/// Sets the three session cookies on success. Unknown username and wrong
/// password return the same 401 body.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid username or password", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let (token, user) = state
        .services
        .auth
        .authenticate(&request.username, &request.password)
        .await?;

    let max_age = Duration::hours(state.config.auth.jwt_expiration_hours as i64);
    let jar = jar
        .add(session_cookie(TOKEN_COOKIE, token, max_age, true))
        .add(session_cookie(ROLE_COOKIE, user.role.to_string(), max_age, false))
        .add(session_cookie(USERNAME_COOKIE, user.username.clone(), max_age, false));

    Ok((
        jar,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user,
        }),
    ))
}

/// Log out by clearing the session cookies
///
/// Idempotent: always succeeds, with or without a prior session.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session cookies cleared", body = LogoutResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let jar = [TOKEN_COOKIE, ROLE_COOKIE, USERNAME_COOKIE]
        .into_iter()
        .fold(jar, |jar, name| jar.add(expired_cookie(name)));

    (
        jar,
        Json(LogoutResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// Get the current caller's user record
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Not authenticated", body = crate::error::GuardResponse)
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<User>> {
    // A token for a since-removed user is no longer a valid session
    let user = state
        .services
        .auth
        .get_by_id(claims.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(user))
}

fn session_cookie(
    name: &'static str,
    value: String,
    max_age: Duration,
    http_only: bool,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(http_only)
        .max_age(max_age)
        .build()
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
