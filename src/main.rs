//! expense-tracker binary: config, pool, schema, then serve.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_tracker::db;
use expense_tracker::{AppConfig, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "expense-tracker", version, about = "HTTP CRUD service for expense records")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Maximum connections held by the database pool
    #[arg(long, default_value_t = db::pool::DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let args = Args::parse();
    let config = AppConfig::from_env().context("configuration error")?;

    let pool = db::create_pool_with_options(&config.database_url, args.max_connections)
        .await
        .context("failed to connect to database")?;
    tracing::info!("database connection established");

    db::migrations::run(&pool)
        .await
        .context("failed to prepare schema")?;

    let server_config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };
    expense_tracker::run_server(pool, server_config)
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
