//! PostgreSQL connection pool management.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool. Small on purpose; every
/// request runs a single short statement.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a bounded PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the connection
/// string is invalid. Callers treat this as startup-fatal.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a pool with an explicit connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
