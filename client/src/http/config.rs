//! Connection settings for [`super::ApiClient`].

use std::collections::BTreeMap;
use std::time::Duration;

use url::Url;

/// Backend root used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

const JSON: &str = "application/json";

/// The base URL cannot anchor API paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid API base URL `{url}`: {reason}")]
pub struct InvalidBaseUrl {
    url: String,
    reason: String,
}

impl InvalidBaseUrl {
    fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Base URL, timeout and default headers shared by every call.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use travel_client::http::ClientConfig;
///
/// let config = ClientConfig::parse("https://api.example.com/api/v1")
///     .expect("valid URL")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// assert_eq!(config.header("Content-Type"), Some("application/json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    default_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Configuration rooted at `base_url` with default timeout and headers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBaseUrl`] unless the URL is `http` or `https` and can
    /// carry a path.
    pub fn new(base_url: Url) -> Result<Self, InvalidBaseUrl> {
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(InvalidBaseUrl::new(
                base_url,
                "scheme must be http or https",
            ));
        }
        if base_url.cannot_be_a_base() {
            return Err(InvalidBaseUrl::new(base_url, "URL cannot carry a path"));
        }
        let default_headers = BTreeMap::from([
            ("Accept".to_owned(), JSON.to_owned()),
            ("Content-Type".to_owned(), JSON.to_owned()),
        ]);
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            default_headers,
        })
    }

    /// Parse `raw` and build a configuration from it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBaseUrl`] when `raw` does not parse or fails the
    /// checks in [`ClientConfig::new`].
    pub fn parse(raw: &str) -> Result<Self, InvalidBaseUrl> {
        let url = Url::parse(raw).map_err(|err| InvalidBaseUrl::new(raw, err.to_string()))?;
        Self::new(url)
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Root that API paths are appended to.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers sent with every request.
    pub const fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    /// Look up one default header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.default_headers.get(name).map(String::as_str)
    }
}
