//! Async client for the Reverso web translation endpoint

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationPayload, WEB_ORIGIN};

/// Fixed endpoint of the web translation API
const API_ENDPOINT: &str = "https://api.reverso.net/translate/v1/translation";

/// Default source language
const DEFAULT_LANGUAGE_FROM: &str = "eng";

/// Default target language
const DEFAULT_LANGUAGE_TO: &str = "fra";

/// Header fingerprint of the reverso.net web front end. The service
/// rejects callers that do not present it, so the set is reproduced
/// verbatim and treated as configuration data.
const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/json, text/plain, */*"),
    ("accept-encoding", "gzip, deflate, br"),
    ("accept-language", "fr,fr-FR;q=0.8,en-US;q=0.5,en;q=0.3"),
    ("connection", "keep-alive"),
    ("content-type", "application/json"),
    ("host", "api.reverso.net"),
    ("origin", "https://www.reverso.net"),
    ("referer", "https://www.reverso.net/"),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    ("te", "trailers"),
    (
        "user-agent",
        "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/118.0",
    ),
    ("x-reverso-origin", WEB_ORIGIN),
];

/// Async translation client for the Reverso web API
///
/// Holds the language configuration and a reusable HTTP client carrying
/// the fixed header set. Languages and detection are configured through
/// chainable setters; the text travels as an argument to [`translate`]
/// on every call, so a configured client can be shared freely.
///
/// [`translate`]: ReversoTranslator::translate
#[derive(Debug, Clone)]
pub struct ReversoTranslator {
    client: reqwest::Client,
    language_from: String,
    language_to: String,
    language_detection: bool,
}

impl ReversoTranslator {
    /// Create a new translator with the default language pair (eng -> fra)
    /// and detection disabled
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(default_headers())
            .build()?;

        Ok(Self {
            client,
            language_from: DEFAULT_LANGUAGE_FROM.to_string(),
            language_to: DEFAULT_LANGUAGE_TO.to_string(),
            language_detection: false,
        })
    }

    /// Set the source language code (e.g. `"eng"`). Codes are passed
    /// through to the service unvalidated.
    pub fn set_language_from(&mut self, language: impl Into<String>) -> &mut Self {
        self.language_from = language.into();
        self
    }

    /// Set the target language code (e.g. `"fra"`)
    pub fn set_language_to(&mut self, language: impl Into<String>) -> &mut Self {
        self.language_to = language.into();
        self
    }

    /// Enable or disable server-side language detection
    pub fn set_language_detection(&mut self, value: bool) -> &mut Self {
        self.language_detection = value;
        self
    }

    /// Translate `input` using the current language configuration
    ///
    /// Sends one POST request and waits for the full response. Returns the
    /// first entry of the response's `translation` array. Fails with
    /// [`TranslationError::MissingTranslationError`] when the response
    /// carries no such entry; transport failures surface as the HTTP
    /// client reports them.
    pub async fn translate(&self, input: &str) -> Result<String> {
        let payload = self.payload(input);

        debug!(
            from = %payload.from,
            to = %payload.to,
            detection = payload.options.language_detection,
            "sending translation request"
        );

        let json: serde_json::Value = self
            .client
            .post(API_ENDPOINT)
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;

        first_translation(&json)
    }

    /// Build the request payload from the current configuration
    fn payload(&self, input: &str) -> TranslationPayload {
        TranslationPayload::new(
            &self.language_from,
            &self.language_to,
            input,
            self.language_detection,
        )
    }
}

/// Assemble the fixed header set
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(DEFAULT_HEADERS.len());
    for &(name, value) in DEFAULT_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    headers
}

/// Pull the first entry out of the response's `translation` array
fn first_translation(json: &serde_json::Value) -> Result<String> {
    json["translation"]
        .get(0)
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .ok_or(TranslationError::MissingTranslationError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_configuration() {
        let translator = ReversoTranslator::new().unwrap();
        let payload = translator.payload("Hello");

        assert_eq!(payload.from, "eng");
        assert_eq!(payload.to, "fra");
        assert_eq!(payload.input, "Hello");
        assert!(!payload.options.language_detection);
    }

    #[test]
    fn setters_chain_on_the_same_instance() {
        let mut translator = ReversoTranslator::new().unwrap();
        translator
            .set_language_from("spa")
            .set_language_to("ita")
            .set_language_detection(true);

        let payload = translator.payload("Ciao");
        assert_eq!(payload.from, "spa");
        assert_eq!(payload.to, "ita");
        assert_eq!(payload.input, "Ciao");
        assert!(payload.options.language_detection);
    }

    #[test]
    fn last_configuration_write_wins() {
        let mut translator = ReversoTranslator::new().unwrap();
        translator.set_language_to("deu");
        translator.set_language_to("ita");

        assert_eq!(translator.payload("x").to, "ita");
    }

    #[test]
    fn extracts_first_translation() {
        let json = json!({ "translation": ["Bonjour", "Salut"] });
        assert_eq!(first_translation(&json).unwrap(), "Bonjour");
    }

    #[test]
    fn empty_translation_array_is_an_error() {
        let json = json!({ "translation": [] });
        assert!(matches!(
            first_translation(&json),
            Err(TranslationError::MissingTranslationError)
        ));
    }

    #[test]
    fn missing_translation_key_is_an_error() {
        let json = json!({ "message": "bad request" });
        assert!(matches!(
            first_translation(&json),
            Err(TranslationError::MissingTranslationError)
        ));
    }

    #[test]
    fn non_string_translation_entry_is_an_error() {
        let json = json!({ "translation": [42] });
        assert!(matches!(
            first_translation(&json),
            Err(TranslationError::MissingTranslationError)
        ));
    }

    #[test]
    fn error_message_hints_at_missing_language() {
        let err = first_translation(&json!({})).unwrap_err();
        assert!(err.to_string().contains("translation language"));
    }

    #[test]
    fn default_headers_carry_the_web_fingerprint() {
        let headers = default_headers();

        assert_eq!(headers.len(), DEFAULT_HEADERS.len());
        assert_eq!(headers.get("x-reverso-origin").unwrap(), "translation.web");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(
            headers.get("accept").unwrap(),
            "application/json, text/plain, */*"
        );
        assert_eq!(headers.get("origin").unwrap(), "https://www.reverso.net");
    }
}
