//! Todo Lists server
//!
//! Serves the session-backed todo-list application over HTTP.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use todo_web::{Config, Server};

/// Todo Lists - session-backed todo-list web application
#[derive(Parser, Debug)]
#[command(name = "todo-web")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "TODO_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind, overriding the configuration file
    #[arg(long, env = "TODO_HOST")]
    host: Option<String>,

    /// Port to bind, overriding the configuration file
    #[arg(short, long, env = "TODO_PORT")]
    port: Option<u16>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    // Initialize logging; RUST_LOG wins over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        "Starting todo-web"
    );

    Server::new(config)?.run().await?;
    Ok(())
}
