//! Catalog domain types for Starfruit.

pub mod image;
pub mod money;
pub mod product;

pub use image::Image;
pub use money::{Money, PriceRange};
pub use product::{Product, ProductVariant, SelectedOption};
