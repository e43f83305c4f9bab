//! # invoicexpress-xml
//!
//! Generic XML document codec for the InvoiceXpress API.
//!
//! The API speaks XML on both sides of the wire, but with no fixed schema
//! worth typing out: request payloads and response bodies are arbitrary
//! nested keyed structures. This crate provides that structure ([`Value`])
//! and the two conversions the wire needs:
//!
//! - [`to_xml`] - serialize a [`Value`] into a single root-wrapped XML
//!   document with a UTF-8 declaration
//! - [`from_xml`] - parse an XML document back into an equivalent [`Value`],
//!   collapsing repeated sibling elements into ordered lists
//!
//! ## Example
//!
//! ```
//! use invoicexpress_xml::{from_xml, to_xml, Value};
//!
//! let payload = Value::map([(
//!     "client",
//!     Value::map([("name", Value::from("Jane Doe")), ("code", Value::from(42))]),
//! )]);
//!
//! let xml = to_xml(&payload).unwrap();
//! assert!(xml.contains("<client><name>Jane Doe</name><code>42</code></client>"));
//!
//! let decoded = from_xml(&xml).unwrap();
//! assert_eq!(decoded, payload);
//! ```

mod decode;
mod encode;
mod error;
mod value;

pub use decode::from_xml;
pub use encode::to_xml;
pub use error::{Error, ErrorKind, Result};
pub use value::Value;

/// Key under which element attributes are preserved when decoding.
pub const ATTRIBUTES_KEY: &str = "@attributes";

/// Key under which character data lands when an element also carries
/// attributes. Plain text-only elements decode straight to [`Value::Text`].
pub const TEXT_KEY: &str = "#text";
