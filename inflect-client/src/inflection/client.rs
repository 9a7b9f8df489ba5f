//! Inflection service HTTP client.
//!
//! Issues one `GET /inflect.xml?name=<word>` per call and classifies the
//! reply. No retries: a failed call is reported once and left to the caller.

use std::time::Duration;

use tracing::debug;

use super::error::InflectionError;
use super::parse::parse_inflections;
use super::types::ParsedResponse;

/// Default base URL for the inflection service.
const DEFAULT_BASE_URL: &str = "http://export.yandex.ru";

/// Path of the inflection endpoint, relative to the base URL.
const INFLECT_PATH: &str = "/inflect.xml";

/// Query parameter carrying the word.
const WORD_PARAM: &str = "name";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unparsable body to keep in errors.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the inflection client.
#[derive(Debug, Clone)]
pub struct InflectionConfig {
    /// Base URL for the service (defaults to the public endpoint)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl InflectionConfig {
    /// Create a config pointing at the public service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for InflectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the word inflection web service.
#[derive(Debug, Clone)]
pub struct InflectionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl InflectionClient {
    /// Create a new client with the given configuration.
    pub fn new(config: InflectionConfig) -> Result<Self, InflectionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let endpoint = format!("{}{}", config.base_url.trim_end_matches('/'), INFLECT_PATH);

        Ok(Self { http, endpoint })
    }

    /// The full URL requests are sent to, without the query string.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the inflections of `word`.
    ///
    /// The word is sent verbatim (percent-encoded) with no validation.
    pub async fn fetch(&self, word: &str) -> Result<ParsedResponse, InflectionError> {
        debug!(word, endpoint = %self.endpoint, "fetching inflections");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[(WORD_PARAM, word)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InflectionError::Api {
                status: status.as_u16(),
                message: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        parse_inflections(&body).map_err(|e| InflectionError::Xml {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inflection::InflectionEntry;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> InflectionClient {
        InflectionClient::new(InflectionConfig::new().with_base_url(server.uri())).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = InflectionConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = InflectionConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client =
            InflectionClient::new(InflectionConfig::new().with_base_url("http://host/")).unwrap();
        assert_eq!(client.endpoint(), "http://host/inflect.xml");

        let client = InflectionClient::new(InflectionConfig::new()).unwrap();
        assert_eq!(client.endpoint(), "http://export.yandex.ru/inflect.xml");
    }

    #[tokio::test]
    async fn fetch_sends_word_as_query_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/inflect.xml"))
            .and(query_param("name", "Санкт-Петербург"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<inflections>
                    <inflection case="1">Санкт-Петербург</inflection>
                    <inflection case="2">Санкт-Петербурга</inflection>
                </inflections>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let parsed = client_for(&server).fetch("Санкт-Петербург").await.unwrap();
        assert_eq!(
            parsed,
            ParsedResponse::FoundList {
                original: None,
                entries: vec![
                    InflectionEntry::new("1", "Санкт-Петербург"),
                    InflectionEntry::new("2", "Санкт-Петербурга"),
                ],
            }
        );
    }

    #[tokio::test]
    async fn fetch_single_record_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<inflections><original>qwzx</original><inflection case=\"1\">qwzx</inflection></inflections>",
            ))
            .mount(&server)
            .await;

        let parsed = client_for(&server).fetch("qwzx").await.unwrap();
        assert_eq!(
            parsed,
            ParsedResponse::NotFound {
                original: Some("qwzx".into())
            }
        );
    }

    #[tokio::test]
    async fn fetch_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch("word").await.unwrap_err();
        match err {
            InflectionError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_unparsable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch("word").await.unwrap_err();
        match err {
            InflectionError::Xml { message, body } => {
                assert_eq!(message, "unexpected root element <html>");
                assert_eq!(body.as_deref(), Some("<html>nope</html>"));
            }
            other => panic!("expected Xml error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_unreachable_host() {
        // Port 1 is reserved and nothing listens on it.
        let client =
            InflectionClient::new(InflectionConfig::new().with_base_url("http://127.0.0.1:1"))
                .unwrap();

        let err = client.fetch("hello").await.unwrap_err();
        assert!(matches!(err, InflectionError::Http(_)), "got {err:?}");
    }
}
