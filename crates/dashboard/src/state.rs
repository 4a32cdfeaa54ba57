//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::shopify::StorefrontClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the Storefront API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    storefront: Option<StorefrontClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The Storefront client is only constructed when the credential pair is
    /// configured; otherwise catalog requests answer with a configuration
    /// error.
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let storefront = config.shopify.as_ref().map(StorefrontClient::new);

        Self {
            inner: Arc::new(AppStateInner { config, storefront }),
        }
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Get a reference to the Storefront API client, if configured.
    #[must_use]
    pub fn storefront(&self) -> Option<&StorefrontClient> {
        self.inner.storefront.as_ref()
    }
}
