//! Reverso Translator - Rust client for the Reverso web translation API
//!
//! This library builds the JSON request the reverso.net web front end
//! sends, posts it with the matching header fingerprint, and extracts the
//! translated string from the response.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::ReversoTranslator,
    errors::TranslationError,
    models::{PayloadOptions, TranslationPayload},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
