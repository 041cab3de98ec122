//! Outbound adapters implementing domain ports.
//!
//! - **http**: reqwest-backed [`crate::domain::ports::HttpTransport`].
//! - **storage**: file and in-memory [`crate::domain::ports::KeyValueStore`]s.
//!
//! Adapters translate between port types and infrastructure; they hold no
//! session or envelope logic.

pub mod http;
pub mod storage;
