//! Catalog export command.
//!
//! Runs the same fetch-and-flatten pipeline as the dashboard's export route,
//! but writes the result to a file or stdout instead of an HTTP response.

use std::path::Path;

use starfruit_core::Product;
use starfruit_dashboard::config::DashboardConfig;
use starfruit_dashboard::export::products_to_csv;
use starfruit_dashboard::shopify::StorefrontClient;

/// Output format for the export command.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ExportFormat {
    /// One denormalized row per variant
    Csv,
    /// The `{"products": [...]}` payload the dashboard UI consumes
    Json,
}

/// Errors the export command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ExportCommandError {
    #[error(
        "Shopify credentials are not configured; set SHOPIFY_DOMAIN and SHOPIFY_STOREFRONT_ACCESS_TOKEN"
    )]
    MissingCredentials,

    #[error("Configuration error: {0}")]
    Config(#[from] starfruit_dashboard::config::ConfigError),

    #[error("Failed to fetch products: {0}")]
    Fetch(#[from] starfruit_dashboard::shopify::ShopifyError),

    #[error("Failed to export products: {0}")]
    Export(#[from] starfruit_dashboard::export::ExportError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch the full catalog and write it to `output` (stdout when `None`).
///
/// # Errors
///
/// Returns [`ExportCommandError`] when credentials are missing, the fetch
/// fails, or the output cannot be serialized or written.
#[allow(clippy::print_stdout)] // stdout is the command's output channel
pub async fn run(format: ExportFormat, output: Option<&Path>) -> Result<(), ExportCommandError> {
    let config = DashboardConfig::from_env()?;
    let shopify = config
        .shopify
        .as_ref()
        .ok_or(ExportCommandError::MissingCredentials)?;

    let client = StorefrontClient::new(shopify);
    tracing::info!("Fetching product catalog...");
    let products: Vec<Product> = client.get_all_products().await?;
    tracing::info!(count = products.len(), "Catalog fetched");

    let body = match format {
        ExportFormat::Csv => products_to_csv(&products)?,
        ExportFormat::Json => {
            serde_json::to_string_pretty(&serde_json::json!({ "products": products }))?
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, body)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{body}"),
    }

    Ok(())
}
