//! Startup schema creation for the expenses table.

use sqlx::PgPool;

/// Create the `expenses` table if it does not exist.
///
/// The schema is otherwise owned by the database; this only guarantees a
/// usable table on a fresh instance. Idempotent, safe to run every startup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("ensuring expenses schema");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id SERIAL PRIMARY KEY,
            description TEXT NOT NULL,
            amount DOUBLE PRECISION NOT NULL,
            category TEXT NOT NULL,
            date TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
