//! CSV export of the flattened catalog.
//!
//! Produces a spreadsheet-consumable view: one row per variant, with the
//! parent product's fields repeated on every row, or a single product-only
//! row when a product has no variants. The column set is fixed and identical
//! across all rows, so the output is valid CSV whatever mix of products comes
//! in.

use starfruit_core::{Money, Product, ProductVariant, SelectedOption};
use thiserror::Error;

/// Column headers, fixed order, identical for every export.
pub const CSV_HEADERS: [&str; 20] = [
    "Product ID",
    "Product Title",
    "Product Handle",
    "Product Type",
    "Product Tags",
    "Product Vendor",
    "Product Available",
    "Total Inventory",
    "Min Price",
    "Max Price",
    "Variant ID",
    "Variant Title",
    "Variant SKU",
    "Variant Available",
    "Variant Price",
    "Compare At Price",
    "Variant Options",
    "Quantity Available",
    "Requires Shipping",
    "Weight",
];

/// Errors that can occur while serializing the catalog to CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// The serialized output was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The underlying writer failed while flushing the buffer.
    #[error("CSV write error: {0}")]
    Io(#[from] std::io::Error),
}

/// One denormalized export row: product context plus variant fields.
///
/// Variant fields are empty strings on product-only rows - never omitted, so
/// every row has the full column set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub product_id: String,
    pub product_title: String,
    pub product_handle: String,
    pub product_type: String,
    pub product_tags: String,
    pub product_vendor: String,
    pub product_available: String,
    pub total_inventory: String,
    pub min_price: String,
    pub max_price: String,
    pub variant_id: String,
    pub variant_title: String,
    pub variant_sku: String,
    pub variant_available: String,
    pub variant_price: String,
    pub compare_at_price: String,
    pub variant_options: String,
    pub quantity_available: String,
    pub requires_shipping: String,
    pub weight: String,
}

impl CsvRow {
    /// Row for one variant, carrying the parent product's fields.
    fn for_variant(product: &Product, variant: &ProductVariant) -> Self {
        Self {
            variant_id: variant.id.clone(),
            variant_title: variant.title.clone(),
            variant_sku: variant.sku.clone().unwrap_or_default(),
            variant_available: yes_no(variant.available_for_sale).to_string(),
            variant_price: format_money(&variant.price),
            compare_at_price: variant
                .compare_at_price
                .as_ref()
                .map(format_money)
                .unwrap_or_default(),
            variant_options: format_options(&variant.selected_options),
            quantity_available: variant.quantity_available.to_string(),
            requires_shipping: yes_no(variant.requires_shipping).to_string(),
            weight: format!("{} {}", variant.weight, variant.weight_unit),
            ..Self::product_only(product)
        }
    }

    /// Row for a product without variants; variant columns stay empty.
    fn product_only(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            product_title: product.title.clone(),
            product_handle: product.handle.clone(),
            product_type: product.product_type.clone(),
            product_tags: product.tags.join(", "),
            product_vendor: product.vendor.clone(),
            product_available: yes_no(product.available_for_sale).to_string(),
            total_inventory: product.total_inventory.to_string(),
            min_price: format_money(&product.price_range.min_variant_price),
            max_price: format_money(&product.price_range.max_variant_price),
            variant_id: String::new(),
            variant_title: String::new(),
            variant_sku: String::new(),
            variant_available: String::new(),
            variant_price: String::new(),
            compare_at_price: String::new(),
            variant_options: String::new(),
            quantity_available: String::new(),
            requires_shipping: String::new(),
            weight: String::new(),
        }
    }

    /// Field values in [`CSV_HEADERS`] order.
    fn record(&self) -> [&str; 20] {
        [
            &self.product_id,
            &self.product_title,
            &self.product_handle,
            &self.product_type,
            &self.product_tags,
            &self.product_vendor,
            &self.product_available,
            &self.total_inventory,
            &self.min_price,
            &self.max_price,
            &self.variant_id,
            &self.variant_title,
            &self.variant_sku,
            &self.variant_available,
            &self.variant_price,
            &self.compare_at_price,
            &self.variant_options,
            &self.quantity_available,
            &self.requires_shipping,
            &self.weight,
        ]
    }
}

/// Flatten the catalog into export rows.
///
/// A product with K >= 1 variants yields K rows; a product with no variants
/// yields exactly one row with empty variant columns.
#[must_use]
pub fn flatten_products(products: &[Product]) -> Vec<CsvRow> {
    let mut rows = Vec::new();

    for product in products {
        if product.variants.is_empty() {
            rows.push(CsvRow::product_only(product));
        } else {
            for variant in &product.variants {
                rows.push(CsvRow::for_variant(product, variant));
            }
        }
    }

    rows
}

/// Serialize the catalog to CSV text, header row included.
///
/// # Errors
///
/// Returns [`ExportError`] if a record cannot be written or the output is not
/// valid UTF-8.
pub fn products_to_csv(products: &[Product]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for row in flatten_products(products) {
        writer.write_record(row.record())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(bytes)?)
}

/// `"<amount> <currencyCode>"`, e.g. `12.00 USD`.
fn format_money(money: &Money) -> String {
    format!("{} {}", money.amount, money.currency_code)
}

/// Booleans render as literal Yes/No strings.
const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// `"<name>: <value>"` pairs joined by `", "`.
fn format_options(options: &[SelectedOption]) -> String {
    options
        .iter()
        .map(|o| format!("{}: {}", o.name, o.value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use starfruit_core::PriceRange;

    use super::*;

    fn money(amount: &str) -> Money {
        Money {
            amount: amount.to_string(),
            currency_code: "USD".to_string(),
        }
    }

    fn variant(id: &str, title: &str) -> ProductVariant {
        ProductVariant {
            id: id.to_string(),
            title: title.to_string(),
            sku: Some(format!("SKU-{title}")),
            available_for_sale: true,
            price: money("8.00"),
            compare_at_price: None,
            selected_options: vec![SelectedOption {
                name: "Size".to_string(),
                value: title.to_string(),
            }],
            image: None,
            quantity_available: 4,
            requires_shipping: true,
            weight: 0.5,
            weight_unit: "KILOGRAMS".to_string(),
        }
    }

    fn product(id: &str, variants: Vec<ProductVariant>) -> Product {
        Product {
            id: id.to_string(),
            title: "Starfruit Tea".to_string(),
            description: "Loose leaf".to_string(),
            handle: "starfruit-tea".to_string(),
            product_type: "Tea".to_string(),
            vendor: "Starfruit".to_string(),
            tags: vec!["tea".to_string(), "new".to_string()],
            featured_image: None,
            images: Vec::new(),
            variants,
            total_inventory: 4,
            available_for_sale: true,
            price_range: PriceRange {
                min_variant_price: money("8.00"),
                max_variant_price: money("12.00"),
            },
        }
    }

    #[test]
    fn test_header_row_is_fixed() {
        let csv = products_to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "Product ID,Product Title,Product Handle,Product Type,Product Tags,\
             Product Vendor,Product Available,Total Inventory,Min Price,Max Price,\
             Variant ID,Variant Title,Variant SKU,Variant Available,Variant Price,\
             Compare At Price,Variant Options,Quantity Available,Requires Shipping,\
             Weight\n"
        );
    }

    #[test]
    fn test_product_without_variants_yields_one_row() {
        let rows = flatten_products(&[product("p1", Vec::new())]);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.product_id, "p1");
        assert_eq!(row.product_tags, "tea, new");
        assert_eq!(row.product_available, "Yes");
        assert_eq!(row.min_price, "8.00 USD");
        assert_eq!(row.max_price, "12.00 USD");

        // Every variant column is the empty string, never omitted
        assert_eq!(row.variant_id, "");
        assert_eq!(row.variant_available, "");
        assert_eq!(row.quantity_available, "");
        assert_eq!(row.weight, "");
    }

    #[test]
    fn test_product_with_variants_yields_row_per_variant() {
        let rows = flatten_products(&[product(
            "p1",
            vec![variant("v1", "100g"), variant("v2", "250g")],
        )]);

        assert_eq!(rows.len(), 2);
        // Product-level columns are identical across the product's rows
        assert_eq!(rows[0].product_id, rows[1].product_id);
        assert_eq!(rows[0].product_title, rows[1].product_title);
        assert_eq!(rows[0].min_price, rows[1].min_price);

        assert_eq!(rows[0].variant_id, "v1");
        assert_eq!(rows[0].variant_sku, "SKU-100g");
        assert_eq!(rows[0].variant_options, "Size: 100g");
        assert_eq!(rows[0].quantity_available, "4");
        assert_eq!(rows[0].requires_shipping, "Yes");
        assert_eq!(rows[0].weight, "0.5 KILOGRAMS");
        assert_eq!(rows[1].variant_id, "v2");
    }

    #[test]
    fn test_compare_at_price_and_sku_render_empty_when_absent() {
        let mut v = variant("v1", "100g");
        v.sku = None;
        v.compare_at_price = None;
        let rows = flatten_products(&[product("p1", vec![v])]);

        assert_eq!(rows[0].variant_sku, "");
        assert_eq!(rows[0].compare_at_price, "");
    }

    #[test]
    fn test_compare_at_price_renders_when_present() {
        let mut v = variant("v1", "100g");
        v.compare_at_price = Some(money("10.00"));
        let rows = flatten_products(&[product("p1", vec![v])]);

        assert_eq!(rows[0].compare_at_price, "10.00 USD");
    }

    #[test]
    fn test_mixed_catalog_round_trip() {
        // 1 product with 2 variants + 1 product with none -> 3 rows
        let products = vec![
            product("p1", vec![variant("v1", "100g"), variant("v2", "250g")]),
            product("p2", Vec::new()),
        ];

        let csv = products_to_csv(&products).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4, "header + 3 rows");

        assert!(lines[1].starts_with("p1,"));
        assert!(lines[1].contains(",Yes,"));
        assert!(lines[2].starts_with("p1,"));
        assert!(lines[3].starts_with("p2,"));
        // Product-only row ends with the empty variant columns
        assert!(lines[3].ends_with(",,,,,,,,,"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut p = product("p1", Vec::new());
        p.title = "Tea, loose leaf".to_string();
        let csv = products_to_csv(&[p]).unwrap();

        assert!(csv.contains("\"Tea, loose leaf\""));
    }

    #[test]
    fn test_integer_weight_renders_without_fraction() {
        let mut v = variant("v1", "100g");
        v.weight = 2.0;
        v.weight_unit = "POUNDS".to_string();
        let rows = flatten_products(&[product("p1", vec![v])]);

        assert_eq!(rows[0].weight, "2 POUNDS");
    }
}
