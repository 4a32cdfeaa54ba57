//! Shopify Storefront API client implementation.
//!
//! Issues the products query with `reqwest`, using the `graphql_client`
//! request/response envelope for the wire format, and drives cursor
//! pagination to exhaustion.

pub mod conversions;
pub mod queries;

use std::sync::Arc;

use graphql_client::Response;
use secrecy::ExposeSecret;
use tracing::{debug, instrument, warn};

use starfruit_core::Product;

use crate::config::ShopifyStorefrontConfig;
use crate::shopify::ShopifyError;

use conversions::convert_products;
use queries::{ProductsData, build_products_query};

/// Number of products requested per page.
const PRODUCTS_PAGE_SIZE: i64 = 25;

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the Shopify Storefront API.
///
/// Holds the endpoint and access token fixed at construction; every request
/// sends the same credential pair. No retry, backoff, or per-call timeout is
/// applied - a single transport failure aborts the caller's fetch, and a hung
/// remote call blocks until the caller's own deadline fires.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    #[must_use]
    pub fn new(config: &ShopifyStorefrontConfig) -> Self {
        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint: endpoint_url(&config.domain, &config.api_version),
                access_token: config.access_token.expose_secret().to_string(),
            }),
        }
    }

    /// Execute one products-page query.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError`] on network failure, a non-success status,
    /// GraphQL errors in the envelope, an undecodable body, or a body that
    /// carries neither data nor errors.
    #[instrument(skip(self))]
    pub async fn query_products_page(
        &self,
        first: i64,
        after: Option<String>,
    ) -> Result<ProductsData, ShopifyError> {
        let request_body = build_products_query(first, after);

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("X-Shopify-Storefront-Access-Token", &self.inner.access_token)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Storefront API returned non-success status"
            );
            return Err(ShopifyError::Status {
                status,
                body: response_text.chars().take(200).collect(),
            });
        }

        let response: Response<ProductsData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Storefront GraphQL response"
                );
                return Err(ShopifyError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");
            return Err(ShopifyError::GraphQL(
                errors.into_iter().map(Into::into).collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "Storefront GraphQL response has no data and no errors"
            );
            ShopifyError::MissingData
        })
    }

    /// Fetch the complete product catalog, one page at a time.
    ///
    /// Pagination is strictly sequential: each page's cursor comes from the
    /// prior response, so page N+1 is only requested after page N completes.
    /// A page whose payload lacks the products connection (or its edges) ends
    /// pagination early and whatever was accumulated so far is returned; a
    /// transport failure instead aborts the whole fetch with no partial data.
    ///
    /// # Errors
    ///
    /// Propagates any [`ShopifyError`] from [`Self::query_products_page`].
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ShopifyError> {
        let mut products: Vec<Product> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let data = self
                .query_products_page(PRODUCTS_PAGE_SIZE, cursor.clone())
                .await?;

            let Some(connection) = data.products else {
                warn!("response has no products connection; stopping pagination");
                break;
            };
            let Some(edges) = connection.edges else {
                warn!("products connection has no edges; stopping pagination");
                break;
            };

            products.extend(convert_products(edges));

            let Some(page_info) = connection.page_info else {
                break;
            };
            if !page_info.has_next_page {
                break;
            }
            match page_info.end_cursor {
                Some(next) => cursor = Some(next),
                // hasNextPage without a cursor would loop on the first page
                // forever; treat it as terminal
                None => break,
            }
        }

        debug!(count = products.len(), "catalog fetch complete");
        Ok(products)
    }
}

/// Builds the GraphQL endpoint URL for a store domain.
///
/// Accepts a bare domain (`my-store.myshopify.com`) or a full origin with
/// scheme; bare domains get `https://`.
fn endpoint_url(domain: &str, api_version: &str) -> String {
    let origin = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.trim_end_matches('/').to_string()
    } else {
        format!("https://{domain}")
    };
    format!("{origin}/api/{api_version}/graphql.json")
}
