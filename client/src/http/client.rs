//! The configured API client.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::interceptors::{BearerAuth, RequestInterceptor};
use super::response::ResponseStage;
use super::{ApiPath, ApiRequest, ClientConfig, ClientError};
use crate::domain::QueryParams;
use crate::domain::ports::{
    HttpMethod, HttpTransport, IgnoreUnauthorized, TokenProvider, TransportError,
    TransportRequest, UnauthorizedHandler,
};
use crate::outbound::http::ReqwestTransport;

/// Sends API calls and returns the unwrapped envelope payload.
///
/// Every call runs the same stages: URL resolution against the base URL,
/// default headers, the interceptor pipeline, the transport, then the
/// response stage. Callers see either `data` or a [`ClientError`].
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
    responses: ResponseStage,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Start building a client for `config`.
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            transport: None,
            interceptors: Vec::new(),
            unauthorized: Arc::new(IgnoreUnauthorized),
        }
    }

    /// Connection settings in use.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: impl Into<ApiPath>,
    ) -> Result<T, ClientError> {
        self.send(ApiRequest::new(HttpMethod::Get, path)).await
    }

    /// `GET path?query`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get_with_query<T, Q>(
        &self,
        path: impl Into<ApiPath>,
        query: &Q,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: QueryParams + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Get, path).with_query(query.query_pairs());
        self.send(request).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post<T, B>(&self, path: impl Into<ApiPath>, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Post, path.into(), body).await
    }

    /// `POST path` without a body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: impl Into<ApiPath>,
    ) -> Result<T, ClientError> {
        self.send(ApiRequest::new(HttpMethod::Post, path)).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put<T, B>(&self, path: impl Into<ApiPath>, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Put, path.into(), body).await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch<T, B>(&self, path: impl Into<ApiPath>, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Patch, path.into(), body).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: impl Into<ApiPath>,
    ) -> Result<T, ClientError> {
        self.send(ApiRequest::new(HttpMethod::Delete, path)).await
    }

    async fn send_json<T, B>(
        &self,
        method: HttpMethod,
        path: ApiPath,
        body: &B,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let encoded = serde_json::to_value(body)
            .map_err(|err| ClientError::request(format!("body not serialisable: {err}")))?;
        self.send(ApiRequest::new(method, path).with_body(encoded))
            .await
    }

    /// Run one call through every stage.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Request`] when the URL cannot be built or an
    ///   interceptor vetoes the call; nothing is sent.
    /// - [`ClientError::Transport`] when no response arrives.
    /// - [`ClientError::Api`] for non-`2xx` statuses and business failures.
    /// - [`ClientError::Decode`] when the body is not an envelope or `data`
    ///   does not fit `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ClientError> {
        let method = request.method;
        let path = request.path.to_string();
        let prepared = self.prepare(request).inspect_err(|err| {
            error!(%method, path, error = %err, "request preparation failed");
        })?;

        debug!(%method, path, "sending request");
        let response = match self.transport.send(prepared).await {
            Ok(response) => response,
            Err(err) => return Err(self.responses.transport_failure(method, &path, err)),
        };
        debug!(%method, path, status = response.status, "response received");
        self.responses.complete(method, &path, &response)
    }

    fn prepare(&self, request: ApiRequest) -> Result<TransportRequest, ClientError> {
        let base = self.config.base_url();
        let url = request.path.resolve(base, &request.query)?;
        let body = request
            .body
            .map(|value| serde_json::to_vec(&value))
            .transpose()
            .map_err(|err| ClientError::request(format!("body not serialisable: {err}")))?;
        let mut prepared = TransportRequest {
            method: request.method,
            url,
            headers: self.config.default_headers().clone(),
            body,
            timeout: self.config.timeout(),
        };
        for interceptor in &self.interceptors {
            interceptor.intercept(&mut prepared)?;
        }
        Ok(prepared)
    }
}

/// Assembles an [`ApiClient`].
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
/// use travel_client::domain::ports::NoToken;
/// use travel_client::http::{ApiClient, ClientConfig};
///
/// let config = ClientConfig::parse("http://localhost:8080/api/v1").expect("valid URL");
/// let client = ApiClient::builder(config)
///     .token_provider(Arc::new(NoToken))
///     .build()
///     .expect("client builds");
/// # drop(client);
/// ```
pub struct ApiClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
    unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl fmt::Debug for ApiClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClientBuilder")
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

impl ApiClientBuilder {
    /// Use `transport` instead of the default reqwest adapter.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Attach bearer tokens from `tokens` to every request.
    #[must_use]
    pub fn token_provider(self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.interceptor(Arc::new(BearerAuth::new(tokens)))
    }

    /// Append an interceptor to the pipeline.
    #[must_use]
    pub fn interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// React to `401` responses with `handler`.
    #[must_use]
    pub fn on_unauthorized(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.unauthorized = handler;
        self
    }

    /// Finish the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when no transport was supplied and
    /// the default reqwest client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::new(self.config.timeout())
                    .map_err(|err| TransportError::invalid_request(err.to_string()))?,
            ),
        };
        Ok(ApiClient {
            config: self.config,
            transport,
            interceptors: self.interceptors,
            responses: ResponseStage::new(self.unauthorized),
        })
    }
}
