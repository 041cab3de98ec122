//! HTTP client core.
//!
//! [`ApiClient`] resolves paths against the configured base URL, runs the
//! request interceptor pipeline, sends through an
//! [`crate::domain::ports::HttpTransport`], then unwraps the response envelope
//! or normalizes the failure into a [`ClientError`].

mod client;
mod config;
mod error;
mod interceptors;
mod request;
mod response;

pub use client::{ApiClient, ApiClientBuilder};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT, InvalidBaseUrl};
pub use error::ClientError;
pub use interceptors::{BearerAuth, RequestInterceptor};
pub use request::{ApiPath, ApiRequest};
pub use response::StatusCategory;
