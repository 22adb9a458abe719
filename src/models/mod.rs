//! Domain records and their JSON wire shapes

pub mod expense;

pub use expense::{Expense, NewExpense};
