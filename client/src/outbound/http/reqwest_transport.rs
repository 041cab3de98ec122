//! Reqwest-backed transport adapter.
//!
//! This adapter owns socket-level concerns only: it sends the prepared request
//! and hands back whatever status and body arrived. Envelope handling and
//! error normalisation live in [`crate::http`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::domain::ports::{
    HttpMethod, HttpTransport, TransportError, TransportRequest, TransportResponse,
};

/// Transport that issues requests through a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport whose client enforces `timeout` as a ceiling.
    ///
    /// Each [`TransportRequest`] also carries its own timeout, applied per
    /// call.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url)
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else if error.is_builder() {
        TransportError::invalid_request(error.to_string())
    } else {
        TransportError::network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    //! Non-network coverage; socket behaviour is exercised in `tests/`.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HttpMethod::Get, Method::GET)]
    #[case(HttpMethod::Post, Method::POST)]
    #[case(HttpMethod::Put, Method::PUT)]
    #[case(HttpMethod::Patch, Method::PATCH)]
    #[case(HttpMethod::Delete, Method::DELETE)]
    fn methods_map_one_to_one(#[case] method: HttpMethod, #[case] expected: Method) {
        assert_eq!(to_reqwest_method(method), expected);
    }

    #[tokio::test]
    async fn unroutable_host_is_a_network_error() {
        let transport = ReqwestTransport::new(Duration::from_secs(2)).expect("client builds");
        let request = TransportRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:1/unreachable".parse().expect("valid url"),
            headers: std::collections::BTreeMap::new(),
            body: None,
            timeout: Duration::from_secs(2),
        };
        let err = transport.send(request).await.expect_err("port 1 refuses");
        assert!(
            matches!(err, TransportError::Network { .. }),
            "connection refusal should map to Network, got {err:?}"
        );
    }
}
