//! One-shot fetch against the product content service.
//!
//! The contract is deliberately narrow: exactly one GET per call, a typed
//! outcome, no retries. Retry policy belongs to the caller (the UI store
//! re-issues the fetch on user action).

use reqwest::StatusCode;
use thiserror::Error;

use crate::language::Language;
use crate::model::{Envelope, Product};

/// Header identifying the calling surface to the content service.
pub const SOURCE_PLATFORM_HEADER: &str = "x-source-platform";
pub const SOURCE_PLATFORM: &str = "web";

const DEFAULT_BASE_URL: &str = "https://api.coursefront.app/discovery-service/api/v1";
const DEFAULT_SLUG: &str = "ielts-course";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub slug: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            slug: DEFAULT_SLUG.into(),
        }
    }
}

/// Why a fetch produced no product.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx HTTP status.
    #[error("content service returned status {status}")]
    Http { status: StatusCode },
    /// 2xx status but the body's `error` array was non-empty.
    #[error("content service rejected the request: {message}")]
    Api { message: String },
    /// Transport-level failure (DNS, timeout, connection reset, bad body).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Build the request URL for a language. Pure so the query-parameter contract
/// is testable without a network.
pub fn request_url(config: &ClientConfig, language: Language) -> String {
    format!(
        "{}/products/{}?lang={}",
        config.base_url.trim_end_matches('/'),
        config.slug,
        language.as_str()
    )
}

/// Fetch the localized product. `Ok(None)` means the service answered
/// successfully but shipped no data — the caller's "no data" state, distinct
/// from an error.
pub async fn fetch_product(
    config: &ClientConfig,
    language: Language,
) -> Result<Option<Product>, FetchError> {
    let response = reqwest::Client::new()
        .get(request_url(config, language))
        .header(SOURCE_PLATFORM_HEADER, SOURCE_PLATFORM)
        .header("accept", "application/json")
        .header("content-type", "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    let envelope: Envelope = response.json().await?;
    if !envelope.error.is_empty() {
        let message = if envelope.message.is_empty() {
            "request was not successful".into()
        } else {
            envelope.message
        };
        return Err(FetchError::Api { message });
    }

    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_carries_language_parameter() {
        let config = ClientConfig::default();
        let url = request_url(&config, Language::Bn);
        assert!(url.ends_with("/products/ielts-course?lang=bn"));
        let url = request_url(&config, Language::En);
        assert!(url.ends_with("?lang=en"));
    }

    #[test]
    fn request_url_tolerates_trailing_slash() {
        let config = ClientConfig {
            base_url: "https://example.test/api/".into(),
            slug: "demo".into(),
        };
        assert_eq!(
            request_url(&config, Language::En),
            "https://example.test/api/products/demo?lang=en"
        );
    }

    #[test]
    fn logical_error_detection_matches_envelope_shape() {
        let body = r#"{ "code": 200, "data": null, "error": ["boom"], "message": "nope" }"#;
        let envelope: Envelope = serde_json::from_str(body).expect("envelope");
        assert!(!envelope.error.is_empty());
        assert!(envelope.data.is_none());
    }
}
