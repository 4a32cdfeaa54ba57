//! GraphQL query document and wire types for the Storefront products query.
//!
//! The response types here mirror the Storefront connection shape verbatim
//! (pageInfo + edges/node wrappers). They exist only at the wire boundary;
//! [`super::conversions`] unwraps them into `starfruit_core` domain types
//! before anything else sees them.

use graphql_client::QueryBody;
use serde::{Deserialize, Serialize};

/// Query document fetching one page of products with variants, images,
/// pricing, and inventory.
pub const PRODUCTS_QUERY: &str = include_str!("../../../graphql/products.graphql");

/// Operation name inside [`PRODUCTS_QUERY`].
pub const PRODUCTS_OPERATION: &str = "GetProductsWithVariantsAndInventory";

/// Variables for [`PRODUCTS_QUERY`].
#[derive(Debug, Clone, Serialize)]
pub struct ProductsVariables {
    /// Page size.
    pub first: i64,
    /// Cursor to resume from; `None` requests the first page.
    pub after: Option<String>,
}

/// Build the request body for one products-page query.
#[must_use]
pub fn build_products_query(first: i64, after: Option<String>) -> QueryBody<ProductsVariables> {
    QueryBody {
        variables: ProductsVariables { first, after },
        query: PRODUCTS_QUERY,
        operation_name: PRODUCTS_OPERATION,
    }
}

// =============================================================================
// Wire types (decoded GraphQL `data` payload)
// =============================================================================

/// Decoded `data` payload of the products query.
///
/// `products` is optional on purpose: a response that decodes but lacks the
/// connection is treated as end-of-data by the fetch loop, not as a failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsData {
    #[serde(default)]
    pub products: Option<ProductsConnection>,
}

/// The products connection: pagination info plus edge-wrapped nodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsConnection {
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub edges: Option<Vec<Edge<ProductNode>>>,
}

/// Cursor pagination info for a connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// Connection wrapper: a sequence of single-field edge objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Option<Vec<Edge<T>>>,
}

/// One edge of a connection.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// One raw product node as returned inside an edge wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub handle: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub vendor: String,
    pub price_range: PriceRangeFields,
    #[serde(default)]
    pub featured_image: Option<ImageFields>,
    #[serde(default)]
    pub images: Option<Connection<ImageFields>>,
    #[serde(default)]
    pub variants: Option<Connection<VariantNode>>,
    #[serde(default)]
    pub total_inventory: Option<i64>,
    #[serde(default)]
    pub available_for_sale: bool,
}

/// One raw variant node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub available_for_sale: bool,
    pub price: MoneyFields,
    #[serde(default)]
    pub compare_at_price: Option<MoneyFields>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOptionFields>,
    #[serde(default)]
    pub image: Option<ImageFields>,
    #[serde(default)]
    pub quantity_available: Option<i64>,
    #[serde(default)]
    pub requires_shipping: bool,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: String,
}

/// Raw image fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFields {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
}

/// Raw money fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyFields {
    pub amount: String,
    pub currency_code: String,
}

/// Raw price range fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeFields {
    pub min_variant_price: MoneyFields,
    pub max_variant_price: MoneyFields,
}

/// Raw selected option fields.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOptionFields {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_document_has_expected_operation() {
        assert!(PRODUCTS_QUERY.contains(PRODUCTS_OPERATION));
        assert!(PRODUCTS_QUERY.contains("products(first: $first, after: $after)"));
    }

    #[test]
    fn test_variables_serialize_null_cursor() {
        let body = build_products_query(25, None);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["variables"]["first"], 25);
        assert!(json["variables"]["after"].is_null());
        assert_eq!(json["operationName"], PRODUCTS_OPERATION);
    }

    #[test]
    fn test_products_data_tolerates_missing_connection() {
        let data: ProductsData = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(data.products.is_none());
    }
}
