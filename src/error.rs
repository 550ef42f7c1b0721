//! Error types for AMN server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
///
/// Every store or credential failure is caught at the handler boundary and
/// mapped to one of these variants; nothing propagates to the transport
/// layer as an unhandled fault.
#[derive(Error, Debug)]
pub enum AppError {
    /// No valid session cookie on a guarded endpoint
    #[error("unauthorized")]
    Unauthorized,

    /// Valid session but insufficient role
    #[error("forbidden")]
    Forbidden,

    /// Unknown username or wrong password. One variant for both, so the
    /// response cannot reveal which check failed.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal server error: {0}")]
    Internal(String),
}

/// Body for session guard rejections (401/403)
#[derive(Serialize, utoipa::ToSchema)]
pub struct GuardResponse {
    pub success: bool,
    pub message: String,
}

/// Generic error body for credential and server failures
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(GuardResponse {
                    success: false,
                    message: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(GuardResponse {
                    success: false,
                    message: "Forbidden: Admin only".to_string(),
                }),
            )
                .into_response(),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            AppError::Database(e) => {
                // Full detail stays server-side
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unauthorized_maps_to_401_with_guard_body() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn forbidden_maps_to_403_admin_only() {
        let response = AppError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Forbidden: Admin only");
    }

    #[tokio::test]
    async fn credential_failure_is_generic_401() {
        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid username or password");
    }

    #[tokio::test]
    async fn store_failure_never_leaks_detail() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");

        let response = AppError::Internal("secret detail".to_string()).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }
}
