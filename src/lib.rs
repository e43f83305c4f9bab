//! # invoicexpress-api
//!
//! An InvoiceXpress API client library for Rust.
//!
//! This library maps dotted `resource.action` method names to the HTTP
//! verbs and URLs of the InvoiceXpress REST/XML API, serializes payloads
//! to XML, and normalizes XML responses into a generic keyed structure
//! with explicit success/error state.
//!
//! ## Security
//!
//! - API keys are redacted in Debug output
//! - TLS certificate verification is on by default and only disabled
//!   through an explicit configuration switch
//!
//! ## Crates
//!
//! - **invoicexpress-xml** - Generic XML document codec (ordered keyed
//!   structures to and from XML)
//! - **invoicexpress-client** - Core HTTP client infrastructure
//! - **invoicexpress-rest** - Method routing, request dispatch, response
//!   normalization
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invoicexpress_api::{Credentials, InvoiceXpressClient, Value};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("yoursite", "api-token")?;
//!     let client = InvoiceXpressClient::new(credentials)?;
//!
//!     let mut request = client.request("clients.create")?;
//!     request.set_payload(Value::map([(
//!         "client",
//!         Value::map([
//!             ("name", Value::from("Jane Doe")),
//!             ("email", Value::from("jane@example.com")),
//!         ]),
//!     )]));
//!     request.send(None, None).await?;
//!
//!     if request.success() {
//!         println!("created: {:?}", request.response());
//!     } else {
//!         eprintln!("failed: {}", request.error_message());
//!     }
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use invoicexpress_client as client;
pub use invoicexpress_rest as rest;
pub use invoicexpress_xml as xml;

// Re-export commonly used types at the top level
pub use invoicexpress_client::{ClientConfig, ClientConfigBuilder};
pub use invoicexpress_rest::{
    ApiRequest, Credentials, Error, ErrorKind, Failure, InvoiceXpressClient,
};
pub use invoicexpress_xml::Value;
