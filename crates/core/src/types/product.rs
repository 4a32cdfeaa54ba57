//! Product and variant types.
//!
//! These are the flattened catalog records the rest of the system works with.
//! The GraphQL connection wrappers (edges/node) are a wire-format convention
//! and never appear here: `images` and `variants` are plain ordered sequences.

use serde::{Deserialize, Serialize};

use super::image::Image;
use super::money::{Money, PriceRange};

/// Selected option on a product variant (e.g. `Size: Large`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Selected value (e.g., "Large", "Blue").
    pub value: String,
}

/// A product variant (specific combination of options).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant ID.
    pub id: String,
    /// Variant title (combination of option values).
    pub title: String,
    /// SKU code.
    #[serde(default)]
    pub sku: Option<String>,
    /// Whether this variant is available for sale.
    pub available_for_sale: bool,
    /// Current price.
    pub price: Money,
    /// Compare-at price (original price if on sale).
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Selected options for this variant, in source order.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
    /// Variant image.
    #[serde(default)]
    pub image: Option<Image>,
    /// Quantity available (0 when inventory is not tracked).
    pub quantity_available: i64,
    /// Whether the variant requires shipping.
    pub requires_shipping: bool,
    /// Variant weight.
    pub weight: f64,
    /// Unit for `weight` (e.g., "KILOGRAMS").
    pub weight_unit: String,
}

/// A product in the catalog.
///
/// Variant order matches the order returned by the source API: page order,
/// then within-page order. Stable across fetches assuming no backend mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// Product title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// URL handle.
    pub handle: String,
    /// Product type/category.
    pub product_type: String,
    /// Vendor name.
    pub vendor: String,
    /// Product tags, in source order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Featured image.
    #[serde(default)]
    pub featured_image: Option<Image>,
    /// All product images, in source order. Empty when the source reports
    /// none; never absent.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Product variants, in source order. Empty when the source reports none;
    /// never absent.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Total inventory across all variants.
    pub total_inventory: i64,
    /// Whether any variant is available for sale.
    pub available_for_sale: bool,
    /// Price range across variants.
    pub price_range: PriceRange,
}
