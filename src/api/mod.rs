//! Typed descriptions of backend calls and the client that executes them.
//!
//! Every operation against the REST backend is first built as an [ApiCall] by
//! one of the pure functions in [requests], then handed to a [Backend] to be
//! executed. The split keeps the request shapes testable without a network.

mod backend;
mod requests;

pub use backend::Backend;

pub(crate) use requests::{
    accounts_request, create_account_request, create_transaction_request, transactions_request,
    update_balance_request,
};

use reqwest::Method;

/// The three notification phases of one backend call.
///
/// The event names are emitted on the tracing events the [Backend] logs when
/// it issues the call, when the call succeeds and when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lifecycle {
    /// Event name logged when the call is issued.
    pub requested: &'static str,
    /// Event name logged when the backend answers with a success status.
    pub succeeded: &'static str,
    /// Event name logged when the call fails for any reason.
    pub failed: &'static str,
}

/// A description of one backend call: what to send and how to report it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ApiCall {
    /// The HTTP method.
    pub method: Method,
    /// The endpoint path relative to the backend base URL, including any
    /// query string, e.g. `/transactions?accountId=3`.
    pub endpoint: String,
    /// The JSON body, if the call carries one.
    pub payload: Option<serde_json::Value>,
    /// The notification phases for this call.
    pub lifecycle: Lifecycle,
}
