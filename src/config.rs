//! Process configuration sourced from the environment.

/// Environment variable naming the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// A missing or empty connection string is a startup-fatal condition
    /// reported to the caller; nothing here terminates the process.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var(DATABASE_URL_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self { database_url })
    }
}
