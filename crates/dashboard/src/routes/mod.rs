//! HTTP route handlers.

pub mod products;

use axum::{
    Router,
    routing::post,
};

use crate::state::AppState;

/// Build the dashboard route tree.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/products",
        post(products::export).get(products::usage_hint),
    )
}
