//! API error type with automatic HTTP status mapping.
//!
//! Error responses are plain text: clients get a status code and a short
//! message, never a structured payload. Storage failures are logged in
//! full and masked with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

#[derive(Debug)]
pub enum ApiError {
    /// Malformed path parameter or request body (400)
    BadRequest(String),

    /// Read of a nonexistent expense (404)
    NotFound { id: i32 },

    /// Storage failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound { id } => {
                (StatusCode::NOT_FOUND, format!("expense {} not found", id))
            }
            Self::Database(e) => {
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id },
            other => Self::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn bad_request_is_400_with_plain_text_body() {
        let response = ApiError::BadRequest("invalid expense id 'abc'".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"invalid expense id 'abc'");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound { id: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"expense 42 not found");
    }

    #[tokio::test]
    async fn database_error_is_500_with_generic_body() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"internal server error");
    }

    #[test]
    fn db_not_found_maps_to_api_not_found() {
        let api: ApiError = DbError::NotFound { id: 9 }.into();
        assert!(matches!(api, ApiError::NotFound { id: 9 }));
    }
}
