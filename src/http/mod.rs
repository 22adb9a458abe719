//! HTTP layer: routing, error mapping, and server bootstrap.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
