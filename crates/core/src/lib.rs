//! Starfruit Core - Shared catalog types.
//!
//! This crate provides the catalog domain types used across the Starfruit
//! components:
//! - `dashboard` - Catalog export backend (HTTP API)
//! - `cli` - Command-line export tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The dashboard
//! crate is responsible for fetching raw Storefront API responses and
//! converting them into these types; once constructed, a [`types::Product`]
//! carries plain ordered sequences only (no GraphQL connection wrappers).
//!
//! All types serialize as camelCase JSON, the shape the dashboard UI consumes
//! and the shape the Storefront API reports.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
