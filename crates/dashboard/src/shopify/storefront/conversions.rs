//! Conversions from raw Storefront wire types to catalog domain types.
//!
//! Every function here is pure and stateless: the same raw input always
//! yields the same domain value. The connection wrappers (edges/node) are
//! unwrapped into plain ordered sequences; an absent wrapper yields an empty
//! sequence, never an absent field. Order is preserved verbatim - no
//! deduplication, no sorting.

use starfruit_core::{Image, Money, PriceRange, Product, ProductVariant, SelectedOption};

use super::queries::{
    Connection, Edge, ImageFields, MoneyFields, PriceRangeFields, ProductNode,
    SelectedOptionFields, VariantNode,
};

/// Convert one page's edge-wrapped nodes into products, preserving order.
#[must_use]
pub fn convert_products(edges: Vec<Edge<ProductNode>>) -> Vec<Product> {
    edges
        .into_iter()
        .map(|edge| convert_product(edge.node))
        .collect()
}

/// Convert one raw product node into a flat [`Product`].
#[must_use]
pub fn convert_product(node: ProductNode) -> Product {
    Product {
        id: node.id,
        title: node.title,
        description: node.description,
        handle: node.handle,
        product_type: node.product_type,
        vendor: node.vendor,
        tags: node.tags,
        featured_image: node.featured_image.map(convert_image),
        images: unwrap_connection(node.images, convert_image),
        variants: unwrap_connection(node.variants, convert_variant),
        total_inventory: node.total_inventory.unwrap_or_default(),
        available_for_sale: node.available_for_sale,
        price_range: convert_price_range(node.price_range),
    }
}

/// Unwrap a connection into a plain sequence of converted nodes.
///
/// An absent wrapper or absent edges sequence yields an empty `Vec`.
fn unwrap_connection<T, U>(connection: Option<Connection<T>>, convert: impl Fn(T) -> U) -> Vec<U> {
    connection
        .and_then(|c| c.edges)
        .map_or_else(Vec::new, |edges| {
            edges.into_iter().map(|e| convert(e.node)).collect()
        })
}

fn convert_variant(v: VariantNode) -> ProductVariant {
    ProductVariant {
        id: v.id,
        title: v.title,
        sku: v.sku,
        available_for_sale: v.available_for_sale,
        price: convert_money(v.price),
        compare_at_price: v.compare_at_price.map(convert_money),
        selected_options: v
            .selected_options
            .into_iter()
            .map(convert_selected_option)
            .collect(),
        image: v.image.map(convert_image),
        quantity_available: v.quantity_available.unwrap_or_default(),
        requires_shipping: v.requires_shipping,
        weight: v.weight.unwrap_or_default(),
        weight_unit: v.weight_unit,
    }
}

fn convert_image(i: ImageFields) -> Image {
    Image {
        id: i.id,
        url: i.url,
        alt_text: i.alt_text,
        width: i.width,
        height: i.height,
    }
}

fn convert_money(m: MoneyFields) -> Money {
    Money {
        amount: m.amount,
        currency_code: m.currency_code,
    }
}

fn convert_price_range(r: PriceRangeFields) -> PriceRange {
    PriceRange {
        min_variant_price: convert_money(r.min_variant_price),
        max_variant_price: convert_money(r.max_variant_price),
    }
}

fn convert_selected_option(o: SelectedOptionFields) -> SelectedOption {
    SelectedOption {
        name: o.name,
        value: o.value,
    }
}
