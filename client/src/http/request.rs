//! API paths and pre-transport request descriptions.

use std::fmt;

use serde_json::Value;
use url::Url;

use super::ClientError;
use crate::domain::ports::HttpMethod;

/// Path below the API base URL, held as decoded segments.
///
/// Segments are percent-encoded only when joined onto the base URL, so an
/// identifier containing `/` or `?` stays one segment.
///
/// # Examples
/// ```
/// use travel_client::http::ApiPath;
///
/// let path = ApiPath::from("/orders").join("o/1").join("cancel");
/// assert_eq!(path.segments(), ["orders", "o/1", "cancel"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Split a literal route such as `/travel/requests` into segments.
    pub fn parse(route: &str) -> Self {
        Self {
            segments: route
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Append one segment verbatim.
    #[must_use]
    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Decoded segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve against `base`, appending `query` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] when `base` cannot carry a path.
    pub fn resolve(&self, base: &Url, query: &[(String, String)]) -> Result<Url, ClientError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::request(format!("{base} cannot carry a path")))?
            .pop_if_empty()
            .extend(&self.segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

impl From<&str> for ApiPath {
    fn from(route: &str) -> Self {
        Self::parse(route)
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// A call described in API terms, before headers and URL resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Route below the base URL.
    pub path: ApiPath,
    /// Query pairs in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Request with no query and no body.
    pub fn new(method: HttpMethod, path: impl Into<ApiPath>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Attach query pairs.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}
