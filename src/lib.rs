//! expense-tracker: HTTP CRUD service for expense records
//!
//! Exposes create/read/update/delete/list over a single PostgreSQL-backed
//! `expenses` table. The binary wires configuration, pool, and schema
//! together; `http::server::run_server` does the serving.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{AppConfig, ConfigError};
pub use http::server::{build_router, run_server, AppState, ServerConfig};
