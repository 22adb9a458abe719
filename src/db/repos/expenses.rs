//! Expense repository: the five statement shapes behind the CRUD API.
//!
//! One parameterized statement per operation. No transactions span more
//! than their single statement, no retries, no batching.

use sqlx::PgPool;

use crate::models::{Expense, NewExpense};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("no expense with id {id}")]
    NotFound { id: i32 },
}

/// Expense repository borrowing the shared pool.
pub struct ExpenseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ExpenseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new row and return it with the storage-assigned id.
    pub async fn create(&self, new: &NewExpense) -> Result<Expense, DbError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (description, amount, category, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, description, amount, category, date
            "#,
        )
        .bind(&new.description)
        .bind(new.amount)
        .bind(&new.category)
        .bind(new.date)
        .fetch_one(self.pool)
        .await?;

        Ok(expense)
    }

    /// Fetch the single expense matching `id`.
    pub async fn get(&self, id: i32) -> Result<Expense, DbError> {
        sqlx::query_as::<_, Expense>(
            "SELECT id, description, amount, category, date FROM expenses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { id })
    }

    /// Overwrite all four editable fields of the row matching `id`.
    ///
    /// A missing row is not an error: the statement affects zero rows and
    /// the caller still observes success. Rows-affected is ignored on
    /// purpose.
    pub async fn update(&self, id: i32, new: &NewExpense) -> Result<(), DbError> {
        sqlx::query(
            r#"
            UPDATE expenses
            SET description = $1, amount = $2, category = $3, date = $4
            WHERE id = $5
            "#,
        )
        .bind(&new.description)
        .bind(new.amount)
        .bind(&new.category)
        .bind(new.date)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Delete the row matching `id`. Missing rows are the same silent
    /// no-op as in [`ExpenseRepo::update`].
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Fetch every expense, in whatever order the storage engine returns.
    ///
    /// Zero rows yield an empty vec, which serializes as `[]`.
    pub async fn list(&self) -> Result<Vec<Expense>, DbError> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT id, description, amount, category, date FROM expenses",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use chrono::{TimeZone, Utc};

    // Integration tests require a real database.
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migration failed");
        pool
    }

    fn sample() -> NewExpense {
        NewExpense {
            description: "bus fare".into(),
            amount: 2.75,
            category: "travel".into(),
            date: Utc.with_ymd_and_hms(2026, 8, 30, 8, 15, 0).unwrap(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_assigns_id_and_round_trips() {
        let pool = test_pool().await;
        let repo = ExpenseRepo::new(&pool);

        let created = repo.create(&sample()).await.expect("create failed");
        assert!(created.id > 0);

        let fetched = repo.get(created.id).await.expect("get failed");
        assert_eq!(fetched.description, "bus fare");
        assert_eq!(fetched.amount, 2.75);
        assert_eq!(fetched.category, "travel");
        assert_eq!(fetched.date, created.date);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = ExpenseRepo::new(&pool);

        let created = repo.create(&sample()).await.expect("create failed");
        repo.delete(created.id).await.expect("delete failed");

        let err = repo.get(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id } if id == created.id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_of_missing_row_succeed() {
        let pool = test_pool().await;
        let repo = ExpenseRepo::new(&pool);

        // An id the database has never issued.
        let missing = i32::MAX;
        repo.update(missing, &sample()).await.expect("update should no-op");
        repo.delete(missing).await.expect("delete should no-op");
    }
}
