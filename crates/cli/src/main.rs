//! Starfruit CLI - catalog export tools.
//!
//! # Usage
//!
//! ```bash
//! # Export the full catalog as CSV
//! starfruit export --format csv --output products.csv
//!
//! # Print the catalog as JSON to stdout
//! starfruit export --format json
//! ```
//!
//! # Commands
//!
//! - `export` - Fetch the full product catalog and write it as CSV or JSON
//!
//! Credentials come from the same environment variables the dashboard uses
//! (`SHOPIFY_DOMAIN`, `SHOPIFY_STOREFRONT_ACCESS_TOKEN`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::export::ExportFormat;

#[derive(Parser)]
#[command(name = "starfruit")]
#[command(author, version, about = "Starfruit catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the full product catalog and write it as CSV or JSON
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Export { format, output } => {
            commands::export::run(format, output.as_deref()).await?;
        }
    }
    Ok(())
}
