//! fitlog - exercise tracking REST API
//!
//! Binary entry point: loads `.env`, parses flags (with PORT and
//! DATABASE_URL environment fallbacks), initializes tracing, builds the
//! lazy database pool, and runs the HTTP server until shutdown.
//!
//! Usage:
//!   fitlog --database-url postgres://...   # explicit connection string
//!   PORT=8080 fitlog                       # port from the environment
//!   RUST_LOG=fitlog_server=debug fitlog    # fine-grained log control

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fitlog_server::db;
use fitlog_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "fitlog",
    version,
    about = "Exercise-tracking REST API over PostgreSQL"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so the env fallbacks below can see it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.debug)?;

    let config = ServerConfig {
        bind_addr: SocketAddr::new(cli.host, cli.port),
    };
    tracing::info!("Starting fitlog on {}", config.bind_addr);

    let pool = db::connect_lazy(&cli.database_url).context("Failed to create database pool")?;

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with console output.
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        // Debug mode: debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_the_defaults() {
        let cli = Cli::try_parse_from([
            "fitlog",
            "--database-url",
            "postgres://localhost/fitlog",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(cli.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(cli.port, 8080);
        assert!(!cli.debug);
    }

    #[test]
    fn defaults_bind_every_interface_on_3000() {
        let cli = Cli::try_parse_from(["fitlog", "--database-url", "postgres://localhost/fitlog"]);

        // PORT may leak in from the test environment; only assert when absent
        if std::env::var("PORT").is_err() {
            let cli = cli.unwrap();
            assert_eq!(cli.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
            assert_eq!(cli.port, 3000);
        }
    }
}
