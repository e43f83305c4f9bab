//! The top-level API client.

use invoicexpress_client::{ClientConfig, HttpClient};

use crate::credentials::Credentials;
use crate::error::Result;
use crate::method::Method;
use crate::request::ApiRequest;
use crate::router::Route;

/// Client for one InvoiceXpress account.
///
/// Holds the HTTP infrastructure and the account credentials; individual
/// calls are made through [`ApiRequest`] values created by
/// [`InvoiceXpressClient::request`], each carrying its own payload and
/// outcome state so independent requests can run in parallel.
///
/// # Example
///
/// ```rust,ignore
/// use invoicexpress_rest::{Credentials, InvoiceXpressClient, Value};
///
/// #[tokio::main]
/// async fn main() -> Result<(), invoicexpress_rest::Error> {
///     let credentials = Credentials::new("yoursite", "api-token")?;
///     let client = InvoiceXpressClient::new(credentials)?;
///
///     let mut request = client.request("clients.create")?;
///     request.set_payload(Value::map([(
///         "client",
///         Value::map([("name", Value::from("Jane Doe"))]),
///     )]));
///     request.send(None, None).await?;
///
///     if request.success() {
///         println!("{:?}", request.response());
///     } else {
///         eprintln!("{}", request.error_message());
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct InvoiceXpressClient {
    http: HttpClient,
    credentials: Credentials,
    endpoint: Option<String>,
}

impl std::fmt::Debug for InvoiceXpressClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvoiceXpressClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl InvoiceXpressClient {
    /// Create a client with default configuration (40 s timeout, TLS
    /// verification on).
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            credentials,
            endpoint: None,
        })
    }

    /// Point the client at a different base URL instead of the canonical
    /// `https://{account}.invoicexpress.net`. For staging hosts and tests.
    pub fn with_endpoint(mut self, base_url: impl Into<String>) -> Self {
        self.endpoint = Some(base_url.into());
        self
    }

    /// The account credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Start a request for the given dotted `resource.action` method.
    ///
    /// The identifier is parsed eagerly, so an unknown method fails here
    /// rather than producing a URL nobody serves.
    pub fn request(&self, method: &str) -> Result<ApiRequest<'_>> {
        let method = Method::parse(method)?;
        Ok(ApiRequest::new(self, method))
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn url_for(&self, route: &Route) -> String {
        match &self.endpoint {
            Some(base) => self.credentials.url_for_base(base, route),
            None => self.credentials.url_for(route),
        }
    }
}
