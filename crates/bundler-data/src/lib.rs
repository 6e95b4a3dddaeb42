//! Data layer for the source bundler.
//!
//! Responsible for discovering and reading source files, filtering their
//! package and import declarations, and writing the aggregated snapshot.

pub mod aggregator;
pub mod filter;
pub mod reader;

pub use aggregator::{aggregate, Aggregator};
pub use bundler_core as core;
