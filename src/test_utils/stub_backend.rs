//! A recording stand-in for the external REST backend.
//!
//! Binds an axum router to a random local port, records every request it
//! receives (method, path with query, decoded JSON body) and answers with
//! configurable canned data. Individual requests can be made to fail to
//! exercise error paths.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use url::Url;

use crate::api::Backend;

/// One request the stub received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    /// The HTTP method, e.g. `"POST"`.
    pub method: String,
    /// The path including any query string, e.g. `"/transactions?accountId=1"`.
    pub path: String,
    /// The decoded JSON body, `Null` when the request had none.
    pub body: Value,
}

#[derive(Debug)]
struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    accounts: Mutex<Value>,
    transactions: Mutex<Value>,
    fail_at: Mutex<Option<usize>>,
}

#[derive(Debug, Clone)]
pub(crate) struct StubBackend {
    base_url: Url,
    state: Arc<StubState>,
}

impl StubBackend {
    /// Start the stub on a random local port.
    pub(crate) async fn start() -> Self {
        let state = Arc::new(StubState {
            requests: Mutex::new(Vec::new()),
            accounts: Mutex::new(json!([])),
            transactions: Mutex::new(json!([])),
            fail_at: Mutex::new(None),
        });

        let router = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind the stub backend");
        let addr = listener
            .local_addr()
            .expect("Could not get the stub backend address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("The stub backend stopped");
        });

        Self {
            base_url: format!("http://{addr}")
                .parse()
                .expect("Could not parse the stub backend URL"),
            state,
        }
    }

    /// A [Backend] client pointed at this stub.
    pub(crate) fn client(&self) -> Backend {
        Backend::new(self.base_url.clone()).expect("Could not create backend client")
    }

    /// Set the JSON answered to `GET /accounts`.
    pub(crate) fn set_accounts(&self, accounts: Value) {
        *self.state.accounts.lock().unwrap() = accounts;
    }

    /// Set the JSON answered to `GET /transactions`.
    pub(crate) fn set_transactions(&self, transactions: Value) {
        *self.state.transactions.lock().unwrap() = transactions;
    }

    /// Make the `number`-th request (1-based, counting every request) answer
    /// with a 500 instead of its canned response.
    pub(crate) fn fail_request(&self, number: usize) {
        *self.state.fail_at.lock().unwrap() = Some(number);
    }

    /// Every request received so far, in order.
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<Arc<StubState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    let path = parts
        .uri
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str().to_owned())
        .unwrap_or_else(|| parts.uri.path().to_owned());

    let number = {
        let mut requests = state.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: parts.method.to_string(),
            path,
            body,
        });
        requests.len()
    };

    if *state.fail_at.lock().unwrap() == Some(number) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let method = parts.method;
    let path = parts.uri.path();

    if method == Method::GET && path == "/accounts" {
        Json(state.accounts.lock().unwrap().clone()).into_response()
    } else if method == Method::GET && path == "/transactions" {
        Json(state.transactions.lock().unwrap().clone()).into_response()
    } else if method == Method::POST && (path == "/accounts" || path == "/transactions") {
        (StatusCode::CREATED, Json(json!({}))).into_response()
    } else if method == Method::PATCH && path.starts_with("/accounts/") {
        Json(json!({})).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
