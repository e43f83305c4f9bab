//! Error types for invoicexpress-rest.
//!
//! Only precondition failures live here: bad credentials, a method the
//! routing table does not know, a route missing its id or lookup value,
//! and payload serialization problems. Everything that happens after the
//! request leaves the process is reported through [`crate::Failure`] on
//! the request outcome instead.

/// Result type alias for invoicexpress-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for invoicexpress-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Credentials or client configuration are unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The dotted method identifier names no supported operation.
    #[error("unsupported method: {method}")]
    UnsupportedMethod { method: String },

    /// The resolved route needs a resource id and none was given.
    #[error("{method} requires a resource id")]
    MissingResourceId { method: String },

    /// The resolved route needs a lookup value and none was given.
    #[error("{method} requires a lookup value")]
    MissingLookupParam { method: String },

    /// The payload could not be serialized to XML.
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<invoicexpress_xml::Error> for Error {
    fn from(err: invoicexpress_xml::Error) -> Self {
        Error {
            kind: ErrorKind::Xml(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<invoicexpress_client::Error> for Error {
    fn from(err: invoicexpress_client::Error) -> Self {
        Error {
            kind: ErrorKind::Config(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
