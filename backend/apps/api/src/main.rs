//! Quill Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors are the crates'
//! own error types rendered through `kernel::error::AppError`.

use clap::Parser;
use quill::AppConfig;
use quill::cli::{Cli, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill=info,auth=info,blog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.instance)?;

    match cli.command.unwrap_or_default() {
        Command::Serve => quill::serve(config).await?,
        Command::InitDb => {
            quill::init_database(&config).await?;
            println!("Initialized the database.");
        }
    }

    Ok(())
}
