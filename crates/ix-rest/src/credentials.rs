//! Account credentials and endpoint URL assembly.

use crate::error::{Error, ErrorKind, Result};
use crate::router::Route;

/// The fixed basic-auth password the API expects alongside the token.
pub(crate) const BASIC_AUTH_PASSWORD: &str = "X";

/// The `(account, api_key)` pair every request needs.
///
/// Held by each client instance rather than process-wide state, so
/// independent clients can talk to different accounts. Validated at
/// construction; a client cannot exist unconfigured.
///
/// The API key is redacted in Debug output.
#[derive(Clone)]
pub struct Credentials {
    account: String,
    api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create credentials for `https://{account}.invoicexpress.net`.
    ///
    /// `account` is the subdomain of your InvoiceXpress account; `api_key`
    /// is the token from the account settings area. Both must be non-empty,
    /// and the account must form a valid host.
    pub fn new(account: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let account = account.into();
        let api_key = api_key.into();

        if account.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "account name must not be empty".into(),
            )));
        }
        if api_key.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "API key must not be empty".into(),
            )));
        }
        if !account
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(Error::new(ErrorKind::Config(format!(
                "account name {account:?} is not a valid subdomain"
            ))));
        }

        let base = format!("https://{account}.invoicexpress.net/");
        url::Url::parse(&base)
            .map_err(|e| Error::with_source(ErrorKind::Config(format!("invalid endpoint {base}")), e))?;

        Ok(Self { account, api_key })
    }

    /// The account subdomain.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The full URL for a resolved route.
    ///
    /// Query pairs are emitted verbatim in route order, with `api_key`
    /// always last, matching the wire format the API documents.
    pub fn url_for(&self, route: &Route) -> String {
        let mut url = format!(
            "https://{}.invoicexpress.net/{}.xml?",
            self.account, route.path
        );
        for (name, value) in &route.query {
            url.push_str(name);
            url.push('=');
            url.push_str(value);
            url.push('&');
        }
        url.push_str("api_key=");
        url.push_str(&self.api_key);
        url
    }

    /// Like [`Credentials::url_for`], but against an arbitrary base URL.
    /// Lets tests and staging setups point at another host.
    pub(crate) fn url_for_base(&self, base: &str, route: &Route) -> String {
        let mut url = format!("{}/{}.xml?", base.trim_end_matches('/'), route.path);
        for (name, value) in &route.query {
            url.push_str(name);
            url.push('=');
            url.push_str(value);
            url.push('&');
        }
        url.push_str("api_key=");
        url.push_str(&self.api_key);
        url
    }
}
