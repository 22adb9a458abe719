//! Expense endpoints: CRUD over /expenses.
//!
//! Success shapes per operation:
//!   POST   /expenses        201 + full record (with assigned id)
//!   GET    /expenses/{id}   200 + record
//!   PUT    /expenses/{id}   204, empty body
//!   DELETE /expenses/{id}   204, empty body
//!   GET    /expenses        200 + array (empty array when no rows)
//!
//! A verb not listed for a matched path gets the router's 405.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::ExpenseRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ExpenseId;
use crate::http::server::AppState;
use crate::models::{Expense, NewExpense};

/// POST /expenses - insert a new expense, returning it with its id.
async fn create_expense(
    State(state): State<AppState>,
    body: Result<Json<NewExpense>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let Json(new) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let expense = ExpenseRepo::new(state.pool()).create(&new).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /expenses/{id}
async fn get_expense(
    State(state): State<AppState>,
    ExpenseId(id): ExpenseId,
) -> Result<Json<Expense>, ApiError> {
    let expense = ExpenseRepo::new(state.pool()).get(id).await?;
    Ok(Json(expense))
}

/// PUT /expenses/{id} - full overwrite of the four editable fields.
///
/// A nonexistent id still answers 204: the update is a silent no-op, not
/// an error.
async fn update_expense(
    State(state): State<AppState>,
    ExpenseId(id): ExpenseId,
    body: Result<Json<NewExpense>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(new) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    ExpenseRepo::new(state.pool()).update(id, &new).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /expenses/{id} - nonexistent ids answer 204, same no-op policy
/// as update.
async fn delete_expense(
    State(state): State<AppState>,
    ExpenseId(id): ExpenseId,
) -> Result<StatusCode, ApiError> {
    ExpenseRepo::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /expenses - every row, in storage-determined order.
async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = ExpenseRepo::new(state.pool()).list().await?;
    Ok(Json(expenses))
}

/// Expense routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
