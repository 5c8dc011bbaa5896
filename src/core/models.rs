//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Origin marker sent both as a request header and inside the payload
/// options; the service uses it to identify web-translation callers.
pub const WEB_ORIGIN: &str = "translation.web";

/// JSON body posted to the translation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationPayload {
    /// Input format, always `"text"`
    pub format: String,
    /// Source language code (e.g. `"eng"`)
    pub from: String,
    /// Target language code (e.g. `"fra"`)
    pub to: String,
    /// Text to translate
    pub input: String,
    /// Options block
    pub options: PayloadOptions,
}

/// Options block of the request body; everything except
/// `languageDetection` is fixed by the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadOptions {
    /// Ask the service to detect the source language
    pub language_detection: bool,
    /// Split the input into sentences server-side
    pub sentence_splitter: bool,
    /// Caller identification marker
    pub origin: String,
    /// Include context results in the response
    pub context_results: bool,
}

impl TranslationPayload {
    /// Build a payload around the variable fields; the fixed fields take
    /// the values the web endpoint expects
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        input: impl Into<String>,
        language_detection: bool,
    ) -> Self {
        Self {
            format: "text".to_string(),
            from: from.into(),
            to: to.into(),
            input: input.into(),
            options: PayloadOptions {
                language_detection,
                sentence_splitter: true,
                origin: WEB_ORIGIN.to_string(),
                context_results: true,
            },
        }
    }
}
