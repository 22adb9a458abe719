//! The expense record, the single entity this service tracks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored expense row.
///
/// `id` is assigned by PostgreSQL at insert time and immutable afterwards.
/// `date` serializes in RFC 3339 text form via chrono's serde support.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Expense {
    pub id: i32,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
}

/// Request body for create and update: an expense without its id.
///
/// All four fields are required. Updates overwrite the whole row; there is
/// no partial merge. Shape errors are rejected generically by serde rather
/// than by per-field rules.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn expense_wire_field_names() {
        let expense = Expense {
            id: 7,
            description: "train ticket".into(),
            amount: 12.5,
            category: "travel".into(),
            date: Utc.with_ymd_and_hms(2026, 8, 30, 9, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["description"], "train ticket");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["category"], "travel");
        assert_eq!(value["date"], "2026-08-30T09:00:00Z");
    }

    #[test]
    fn new_expense_parses_idless_body() {
        let body = r#"{
            "description": "lunch",
            "amount": 9.75,
            "category": "food",
            "date": "2026-08-30T12:00:00Z"
        }"#;

        let new: NewExpense = serde_json::from_str(body).unwrap();
        assert_eq!(new.description, "lunch");
        assert_eq!(new.amount, 9.75);
        assert_eq!(new.category, "food");
    }

    #[test]
    fn new_expense_rejects_missing_field() {
        let body = r#"{"description": "lunch", "amount": 9.75}"#;
        assert!(serde_json::from_str::<NewExpense>(body).is_err());
    }

    #[test]
    fn new_expense_rejects_type_mismatch() {
        let body = r#"{
            "description": "lunch",
            "amount": "not a number",
            "category": "food",
            "date": "2026-08-30T12:00:00Z"
        }"#;
        assert!(serde_json::from_str::<NewExpense>(body).is_err());
    }
}
