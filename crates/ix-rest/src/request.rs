//! One logical API call and its outcome.

use invoicexpress_client::RequestBuilder;
use invoicexpress_xml::{from_xml, to_xml, Value};
use tracing::{debug, warn};

use crate::client::InvoiceXpressClient;
use crate::credentials::BASIC_AUTH_PASSWORD;
use crate::error::Result;
use crate::method::Method;
use crate::router::resolve;

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// A per-request failure, reported through the outcome accessors rather
/// than raised: the caller inspects and decides whether to try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The request never completed: timeout, connection, or TLS trouble.
    Transport(String),
    /// The server answered, but with an `error` payload or a status
    /// outside 200/201.
    Api(String),
    /// The response body was not well-formed XML.
    Decode(String),
}

impl Failure {
    /// The underlying message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Failure::Transport(m) | Failure::Api(m) | Failure::Decode(m) => m,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Transport(m) => write!(f, "transport error: {m}"),
            Failure::Api(m) => f.write_str(m),
            Failure::Decode(m) => write!(f, "malformed response body: {m}"),
        }
    }
}

/// One logical API call: a method identifier, an optional payload, and,
/// once [`ApiRequest::send`] has run, the normalized outcome.
///
/// Outcome state is instance-scoped. Callers wanting concurrency run
/// independent `ApiRequest` values against the same client.
#[derive(Debug)]
pub struct ApiRequest<'a> {
    client: &'a InvoiceXpressClient,
    method: Method,
    payload: Option<Value>,
    succeeded: bool,
    failure: Option<Failure>,
    response: Value,
}

impl<'a> ApiRequest<'a> {
    pub(crate) fn new(client: &'a InvoiceXpressClient, method: Method) -> Self {
        Self {
            client,
            method,
            payload: None,
            succeeded: false,
            failure: None,
            response: Value::default(),
        }
    }

    /// The parsed method identifier.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Store the payload to serialize. Not validated; the server decides.
    pub fn set_payload(&mut self, data: Value) {
        self.payload = Some(data);
    }

    /// The XML document this request would send, for inspection and
    /// debugging. Pure; does not touch the network.
    pub fn payload_xml(&self) -> Result<String> {
        let empty = Value::default();
        let payload = self.payload.as_ref().unwrap_or(&empty);
        Ok(to_xml(payload)?)
    }

    /// Execute one full request/response cycle.
    ///
    /// `id` addresses a single resource where the route needs one;
    /// `lookup` is the search value of the `find-by-*` methods.
    ///
    /// Returns `Err` only for preconditions: an unroutable method, a
    /// missing id or lookup value, or an unserializable payload. Once the
    /// request is on the wire, every failure (transport, API error,
    /// undecodable body) lands in the outcome accessors.
    pub async fn send(&mut self, id: Option<u64>, lookup: Option<&str>) -> Result<()> {
        self.succeeded = false;
        self.failure = None;
        self.response = Value::default();

        let body = if self.method.carries_body() {
            let xml = self.payload_xml()?;
            debug!(method = %self.method, payload = %xml, "generated XML payload");
            Some(xml)
        } else {
            None
        };

        let route = resolve(&self.method, id, lookup)?;
        let url = self.client.url_for(&route);
        debug!(method = %self.method, verb = %route.verb, url = %url, "dispatching request");

        let mut request = RequestBuilder::new(route.verb, &url)
            .header("Content-Type", XML_CONTENT_TYPE)
            .basic_auth(self.client.credentials().api_key(), BASIC_AUTH_PASSWORD);
        if let Some(body) = body {
            request = request.xml(body);
        }

        let response = match self.client.http().execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(method = %self.method, error = %e, "transport failure");
                self.failure = Some(Failure::Transport(e.to_string()));
                return Ok(());
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(method = %self.method, error = %e, "failed to read response body");
                self.failure = Some(Failure::Transport(e.to_string()));
                return Ok(());
            }
        };

        // blank bodies (the API answers some PUTs with a single space) decode to nothing
        if !text.trim().is_empty() {
            match from_xml(&text) {
                Ok(value) => self.response = value,
                Err(e) => {
                    warn!(method = %self.method, status, error = %e, "undecodable response body");
                    self.failure = Some(Failure::Decode(e.to_string()));
                    return Ok(());
                }
            }
        }

        self.succeeded = matches!(status, 200 | 201);
        debug!(method = %self.method, status, succeeded = self.succeeded, "request completed");

        if let Some(message) = self.response.get("error").and_then(Value::as_text) {
            self.failure = Some(Failure::Api(message.to_string()));
        } else if !self.succeeded {
            self.failure = Some(Failure::Api(format!("unexpected HTTP status {status}")));
        }

        Ok(())
    }

    /// Whether the last completed request answered with status 200 or 201.
    pub fn success(&self) -> bool {
        self.succeeded
    }

    /// The failure message of the last request, empty when there was none.
    pub fn error_message(&self) -> String {
        self.failure
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// The typed failure of the last request, if any.
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// The decoded response body; an empty map until a request completes
    /// with a decodable body.
    pub fn response(&self) -> &Value {
        &self.response
    }
}
