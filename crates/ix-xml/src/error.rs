//! Error types for invoicexpress-xml.

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for codec operations.
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
    /// The input is not well-formed XML.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// The value cannot be represented as an XML document.
    #[error("XML encode error: {0}")]
    Encode(String),
}
