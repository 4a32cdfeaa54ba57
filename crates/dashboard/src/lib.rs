//! Starfruit Dashboard library.
//!
//! This crate provides the dashboard functionality as a library, allowing the
//! catalog pipeline (Storefront client, normalizer, CSV exporter) and routes
//! to be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod export;
pub mod routes;
pub mod shopify;
pub mod state;
