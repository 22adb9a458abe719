//! Database layer: connection pool, schema, and the expense repository.
//!
//! Handlers never hold a connection across awaits on other requests; each
//! operation issues exactly one statement through the shared pool, so the
//! "one connection per logical request" semantic holds without per-request
//! connection churn.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::expenses::{DbError, ExpenseRepo};
