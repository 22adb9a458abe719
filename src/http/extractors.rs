//! Custom Axum extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Expense id from the `{id}` path segment, parsed as a decimal integer.
///
/// Rejects with 400 before the handler body runs, so update and delete
/// never touch storage on a malformed id.
pub struct ExpenseId(pub i32);

impl<S> FromRequestParts<S> for ExpenseId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("missing id path segment".to_owned()))?;

        let id = raw
            .parse::<i32>()
            .map_err(|_| ApiError::BadRequest(format!("invalid expense id '{}'", raw)))?;

        Ok(Self(id))
    }
}
