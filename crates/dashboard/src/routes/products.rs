//! Catalog export route handlers.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

use starfruit_core::Product;

use crate::error::AppError;
use crate::export;
use crate::state::AppState;

/// Request body for the export endpoint.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// `"csv"` for a CSV attachment; any other value (or none) returns JSON.
    pub format: Option<String>,
}

/// JSON response body carrying the full catalog.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Fetch the full product catalog and return it as CSV or JSON.
///
/// The fetch runs to completion before anything is written: the response is
/// either the whole catalog or an error payload, never a partial stream.
///
/// # Errors
///
/// Returns [`AppError::MissingCredentials`] when the Storefront credential
/// pair is not configured, [`AppError::Fetch`] when the catalog fetch fails,
/// and [`AppError::Export`] when CSV serialization fails.
#[instrument(skip(state, request))]
pub async fn export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let storefront = state.storefront().ok_or(AppError::MissingCredentials)?;

    let products = storefront.get_all_products().await?;

    if request.format.as_deref() == Some("csv") {
        let csv = export::products_to_csv(&products)?;
        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"products.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(ProductsResponse { products }).into_response())
    }
}

/// Reject non-POST access with a usage hint.
pub async fn usage_hint() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "Please use POST request" })),
    )
}
