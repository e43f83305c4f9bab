//! # invoicexpress-rest
//!
//! InvoiceXpress REST/XML API client: method routing, request dispatch,
//! and response normalization.
//!
//! The API is addressed by dotted `resource.action` identifiers. This
//! crate maps each identifier to an HTTP verb and URL, serializes the
//! payload to XML, dispatches the call, and normalizes the XML response
//! into a generic keyed structure with explicit success/error state.
//!
//! ## Features
//!
//! - **Method routing** - enum-keyed table from `resource.action` to verb,
//!   path, and query string
//! - **Request dispatch** - one synchronous cycle per call, no retries
//! - **Outcome accessors** - success flag, typed failure, decoded body
//! - **Per-instance credentials** - no process-wide state; independent
//!   clients talk to independent accounts
//!
//! ## Example
//!
//! ```rust,ignore
//! use invoicexpress_rest::{Credentials, InvoiceXpressClient, Value};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), invoicexpress_rest::Error> {
//!     let client = InvoiceXpressClient::new(Credentials::new("yoursite", "api-token")?)?;
//!
//!     let mut request = client.request("clients.find-by-name")?;
//!     request.send(None, Some("Jane Doe")).await?;
//!
//!     if request.success() {
//!         println!("{:?}", request.response().get("client"));
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod credentials;
mod error;
mod method;
mod request;
mod router;

pub use client::InvoiceXpressClient;
pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use method::{Action, Method, Resource};
pub use request::{ApiRequest, Failure};
pub use router::{resolve, Route};

// Re-export the pieces callers need from the collaborating crates
pub use invoicexpress_client::{ClientConfig, ClientConfigBuilder, RequestMethod};
pub use invoicexpress_xml::Value;
