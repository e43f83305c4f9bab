//! Dotted `resource.action` method identifiers.
//!
//! The API is addressed by strings like `"clients.get"` or
//! `"invoices.change-state"`. Both halves parse into enums up front, so a
//! typo fails at `request()` time instead of producing a URL nobody serves.

use crate::error::{Error, ErrorKind, Result};

/// Top-level entity type in the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Invoices,
    SimplifiedInvoices,
    Clients,
}

impl Resource {
    /// The resource as it appears in method identifiers and URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Invoices => "invoices",
            Resource::SimplifiedInvoices => "simplified_invoices",
            Resource::Clients => "clients",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "invoices" => Some(Resource::Invoices),
            "simplified_invoices" => Some(Resource::SimplifiedInvoices),
            "clients" => Some(Resource::Clients),
            _ => None,
        }
    }
}

/// Operation performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    List,
    Get,
    Update,
    ChangeState,
    EmailInvoice,
    /// List the invoices of one client.
    Invoices,
    FindByName,
    FindByCode,
    CreateInvoice,
    CreateCashInvoice,
    CreateCreditNote,
    CreateDebitNote,
}

impl Action {
    /// The action as it appears in method identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::List => "list",
            Action::Get => "get",
            Action::Update => "update",
            Action::ChangeState => "change-state",
            Action::EmailInvoice => "email-invoice",
            Action::Invoices => "invoices",
            Action::FindByName => "find-by-name",
            Action::FindByCode => "find-by-code",
            Action::CreateInvoice => "create-invoice",
            Action::CreateCashInvoice => "create-cash-invoice",
            Action::CreateCreditNote => "create-credit-note",
            Action::CreateDebitNote => "create-debit-note",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Action::Create),
            "list" => Some(Action::List),
            "get" => Some(Action::Get),
            "update" => Some(Action::Update),
            "change-state" => Some(Action::ChangeState),
            "email-invoice" => Some(Action::EmailInvoice),
            "invoices" => Some(Action::Invoices),
            "find-by-name" => Some(Action::FindByName),
            "find-by-code" => Some(Action::FindByCode),
            "create-invoice" => Some(Action::CreateInvoice),
            "create-cash-invoice" => Some(Action::CreateCashInvoice),
            "create-credit-note" => Some(Action::CreateCreditNote),
            "create-debit-note" => Some(Action::CreateDebitNote),
            _ => None,
        }
    }

    /// Split a document-creation action into its two path segments:
    /// `create-credit-note` becomes `("create", "credit-note")`.
    pub(crate) fn document_segments(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Action::CreateInvoice => Some(("create", "invoice")),
            Action::CreateCashInvoice => Some(("create", "cash-invoice")),
            Action::CreateCreditNote => Some(("create", "credit-note")),
            Action::CreateDebitNote => Some(("create", "debit-note")),
            _ => None,
        }
    }
}

/// A parsed method identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method {
    pub resource: Resource,
    pub action: Action,
}

impl Method {
    /// Parse a dotted `resource.action` identifier.
    pub fn parse(method: &str) -> Result<Self> {
        let unsupported = || {
            Error::new(ErrorKind::UnsupportedMethod {
                method: method.to_string(),
            })
        };

        let (resource, action) = method.split_once('.').ok_or_else(unsupported)?;
        let resource = Resource::parse(resource).ok_or_else(unsupported)?;
        let action = Action::parse(action).ok_or_else(unsupported)?;
        Ok(Method { resource, action })
    }

    /// Requests carry a payload body unless the action is exactly `get`.
    pub fn carries_body(&self) -> bool {
        self.action != Action::Get
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.resource.as_str(), self.action.as_str())
    }
}
