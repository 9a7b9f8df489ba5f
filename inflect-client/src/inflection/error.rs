//! Inflection client error types.

/// Errors that can occur when querying the inflection service.
///
/// The caching facade absorbs all of these into a fallback result; they
/// are only observable through [`InflectionClient::fetch`].
///
/// [`InflectionClient::fetch`]: super::InflectionClient::fetch
#[derive(Debug, thiserror::Error)]
pub enum InflectionError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed
    #[error("XML parse error: {message}")]
    Xml {
        message: String,
        body: Option<String>,
    },
}
