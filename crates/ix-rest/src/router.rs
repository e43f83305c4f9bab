//! The routing table: method identifier to HTTP verb, path, and query.

use invoicexpress_client::RequestMethod;

use crate::error::{Error, ErrorKind, Result};
use crate::method::{Action, Method, Resource};

/// A resolved route: everything needed to address one API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// HTTP verb. POST unless the table says otherwise.
    pub verb: RequestMethod,
    /// URL path relative to the account host, without the `.xml` suffix.
    pub path: String,
    /// Resource-specific query pairs, emitted ahead of `api_key`.
    pub query: Vec<(String, String)>,
}

impl Route {
    fn new(verb: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }
}

/// Resolve a method identifier into its route.
///
/// `id` addresses a single resource where the path needs one; `lookup` is
/// the search value of the `find-by-*` actions. Both are mandatory exactly
/// where the table uses them.
pub fn resolve(method: &Method, id: Option<u64>, lookup: Option<&str>) -> Result<Route> {
    use RequestMethod::{Get, Post, Put};

    let require_id = || {
        id.ok_or_else(|| {
            Error::new(ErrorKind::MissingResourceId {
                method: method.to_string(),
            })
        })
    };
    let require_lookup = || {
        lookup.ok_or_else(|| {
            Error::new(ErrorKind::MissingLookupParam {
                method: method.to_string(),
            })
        })
    };

    let resource = method.resource.as_str();

    // actions like create-credit-note split on the first dash
    if method.resource == Resource::Clients {
        if let Some((before, after)) = method.action.document_segments() {
            return Ok(Route::new(
                Post,
                format!("clients/{}/{before}/{after}", require_id()?),
            ));
        }
    }

    let route = match (method.resource, method.action) {
        // Document resources
        (Resource::Invoices | Resource::SimplifiedInvoices, Action::Create | Action::List) => {
            Route::new(Post, resource)
        }
        (
            Resource::Invoices | Resource::SimplifiedInvoices,
            Action::ChangeState | Action::EmailInvoice,
        ) => Route::new(
            Put,
            format!("{resource}/{}/{}", require_id()?, method.action.as_str()),
        ),
        (Resource::Invoices | Resource::SimplifiedInvoices, Action::Get) => {
            Route::new(Get, format!("{resource}/{}", require_id()?))
        }
        (Resource::Invoices | Resource::SimplifiedInvoices, Action::Update) => {
            Route::new(Put, format!("{resource}/{}", require_id()?))
        }

        // Clients
        (Resource::Clients, Action::Create | Action::List) => Route::new(Post, "clients"),
        (Resource::Clients, Action::Get) => Route::new(Get, format!("clients/{}", require_id()?)),
        (Resource::Clients, Action::Update) => {
            Route::new(Put, format!("clients/{}", require_id()?))
        }
        (Resource::Clients, Action::Invoices) => {
            Route::new(Get, format!("clients/{}/invoices", require_id()?))
        }
        (Resource::Clients, Action::FindByName) => {
            Route::new(Get, "clients/find-by-name").with_query("client_name", require_lookup()?)
        }
        (Resource::Clients, Action::FindByCode) => {
            Route::new(Get, "clients/find-by-code").with_query("client_code", require_lookup()?)
        }
        _ => {
            return Err(Error::new(ErrorKind::UnsupportedMethod {
                method: method.to_string(),
            }))
        }
    };

    Ok(route)
}
