//! Integration tests for the `/api/products` export route.
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`; the
//! Storefront side is a `wiremock` server, so the whole request path from
//! JSON body to CSV attachment is exercised without real network traffic.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use starfruit_dashboard::config::{DashboardConfig, ShopifyStorefrontConfig};
use starfruit_dashboard::routes;
use starfruit_dashboard::state::AppState;

const GRAPHQL_PATH: &str = "/api/2023-10/graphql.json";

fn app(shopify: Option<ShopifyStorefrontConfig>) -> Router {
    let state = AppState::new(DashboardConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
        shopify,
        sentry_dsn: None,
    });
    Router::new().merge(routes::routes()).with_state(state)
}

fn shopify_config(server: &MockServer) -> ShopifyStorefrontConfig {
    ShopifyStorefrontConfig {
        domain: server.uri(),
        api_version: "2023-10".to_string(),
        access_token: SecretString::from("test-token"),
    }
}

fn export_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn body_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("body read");
    serde_json::from_slice(&bytes).expect("JSON body")
}

/// One-page catalog: a product with one variant plus a variant-less product.
fn single_page_catalog() -> Value {
    json!({"data": {"products": {
        "pageInfo": {"hasNextPage": false, "endCursor": null},
        "edges": [
            {"node": {
                "id": "gid://shopify/Product/1",
                "title": "Starfruit Tea",
                "description": "Loose leaf",
                "handle": "starfruit-tea",
                "productType": "Tea",
                "tags": ["tea"],
                "vendor": "Starfruit",
                "priceRange": {
                    "minVariantPrice": {"amount": "8.00", "currencyCode": "USD"},
                    "maxVariantPrice": {"amount": "8.00", "currencyCode": "USD"},
                },
                "featuredImage": null,
                "images": {"edges": []},
                "variants": {"edges": [{"node": {
                    "id": "gid://shopify/ProductVariant/11",
                    "title": "100g",
                    "sku": "TEA-100",
                    "availableForSale": true,
                    "price": {"amount": "8.00", "currencyCode": "USD"},
                    "compareAtPrice": null,
                    "selectedOptions": [{"name": "Size", "value": "100g"}],
                    "image": null,
                    "quantityAvailable": 4,
                    "requiresShipping": true,
                    "weight": 0.1,
                    "weightUnit": "KILOGRAMS",
                }}]},
                "totalInventory": 4,
                "availableForSale": true,
            }},
            {"node": {
                "id": "gid://shopify/Product/2",
                "title": "Gift Card",
                "description": "",
                "handle": "gift-card",
                "productType": "Gift Cards",
                "tags": [],
                "vendor": "Starfruit",
                "priceRange": {
                    "minVariantPrice": {"amount": "25.00", "currencyCode": "USD"},
                    "maxVariantPrice": {"amount": "25.00", "currencyCode": "USD"},
                },
                "featuredImage": null,
                "images": {"edges": []},
                "variants": {"edges": []},
                "totalInventory": 0,
                "availableForSale": true,
            }},
        ],
    }}})
}

#[tokio::test]
async fn missing_credentials_return_configuration_error() {
    let response = app(None)
        .oneshot(export_request(r#"{"format":"json"}"#))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response.into_body()).await;
    assert_eq!(
        body["error"],
        "Shopify credentials are not configured on the server"
    );
}

#[tokio::test]
async fn json_export_returns_products_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_page_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(Some(shopify_config(&server)))
        .oneshot(export_request(r#"{"format":"json"}"#))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;

    let products = body["products"].as_array().expect("products array");
    assert_eq!(products.len(), 2);
    // Domain types serialize camelCase for the UI
    assert_eq!(products[0]["availableForSale"], true);
    assert_eq!(products[0]["variants"][0]["quantityAvailable"], 4);
    assert_eq!(products[1]["variants"].as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn unknown_format_falls_back_to_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_page_catalog()))
        .mount(&server)
        .await;

    let response = app(Some(shopify_config(&server)))
        .oneshot(export_request(r#"{"format":"xml"}"#))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert!(body["products"].is_array());
}

#[tokio::test]
async fn csv_export_returns_attachment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_page_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(Some(shopify_config(&server)))
        .oneshot(export_request(r#"{"format":"csv"}"#))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type"),
        "text/csv"
    );
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("content disposition"),
        "attachment; filename=\"products.csv\""
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read");
    let csv = String::from_utf8(bytes.to_vec()).expect("utf-8 body");

    let lines: Vec<&str> = csv.lines().collect();
    // Header + 1 variant row + 1 product-only row
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Product ID,Product Title,"));
    assert!(lines[1].contains("TEA-100"));
    assert!(lines[2].starts_with("gid://shopify/Product/2,"));
}

#[tokio::test]
async fn upstream_failure_returns_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let response = app(Some(shopify_config(&server)))
        .oneshot(export_request(r#"{"format":"json"}"#))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response.into_body()).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("Failed to fetch products: "));
}

#[tokio::test]
async fn get_requests_receive_usage_hint() {
    let response = app(None)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/products")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Please use POST request");
}
