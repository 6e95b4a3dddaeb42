//! Shared building blocks for the source bundler: errors, settings, the
//! language profile and the models passed between crates.

pub mod error;
pub mod language;
pub mod models;
pub mod settings;

pub use error::{BundleError, Result};
