//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The response parsed as JSON but carried no usable `translation` entry
    #[error("an error has occurred, you probably didn't specify a translation language")]
    MissingTranslationError,

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
