//! # invoicexpress-client
//!
//! Core HTTP client infrastructure for the InvoiceXpress API.
//!
//! This crate executes single request/response cycles and nothing more:
//! no retries, no pooling knobs, no pagination. Higher layers decide what
//! to send and how to interpret what comes back.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            invoicexpress-rest               │
//! │  (method routing, payload/outcome handling) │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │                 HttpClient                  │
//! │  - Single-shot request execution            │
//! │  - Basic auth, XML content type, timeout    │
//! │  - Request/response tracing                 │
//! └─────────────────────────────────────────────┘
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("invoicexpress-api/", env!("CARGO_PKG_VERSION"));

/// Default request timeout, matching the upstream API's recommended ceiling.
pub const DEFAULT_TIMEOUT_SECS: u64 = 40;
