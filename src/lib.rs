//! Banquier is a small web client for managing personal bank accounts.
//!
//! It serves HTML pages for logging in, listing accounts, creating accounts,
//! browsing an account's transactions and transferring funds between two
//! accounts. All durable data lives in an external REST backend; this crate
//! validates user input, builds the backend requests and renders the results.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod account;
mod alert;
mod api;
mod app_state;
mod endpoints;
mod html;
mod log_in;
mod log_out;
mod money;
mod navigation;
mod not_found;
mod routing;
mod session;
mod transaction;
mod transfer;

#[cfg(test)]
mod test_utils;

pub use api::Backend;
pub use app_state::AppState;
pub use routing::build_router;

use crate::{alert::error_alert, html::render, not_found::not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Validation problems are not errors: they are ordinary values rendered back
/// into the form that produced them. Everything here is a failed backend call.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backend could not be reached at all (connection refused, timeout,
    /// DNS failure). The string is the transport error for the server logs.
    #[error("could not reach the backend: {0}")]
    BackendRequest(String),

    /// The backend answered with a non-success status code.
    #[error("the backend answered {status} for {endpoint}")]
    BackendStatus {
        /// The HTTP status code the backend answered with.
        status: u16,
        /// The endpoint that was called.
        endpoint: String,
    },

    /// The backend answered with a body that could not be decoded as the
    /// expected JSON.
    #[error("could not decode the backend response: {0}")]
    BackendResponse(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., the account id) are correct and that the resource exists on the
    /// backend.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => not_found_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                render(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    html::error_page(
                        "Erreur interne",
                        "500",
                        "Une erreur s'est produite en contactant le backend.",
                        "Réessayez plus tard ou consultez les journaux du serveur.",
                    ),
                )
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for requests initiated by HTMX.
    ///
    /// Forms post with `hx-target-error` pointed at the alert container, so a
    /// failed backend call shows up as a banner instead of replacing the form.
    fn into_alert_response(self) -> Response {
        match self {
            Error::NotFound => render(
                StatusCode::NOT_FOUND,
                error_alert(
                    "Ressource introuvable",
                    "Le backend ne connaît pas cette ressource. Actualisez la page et réessayez.",
                ),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                render(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_alert(
                        "Le backend est indisponible",
                        "L'opération n'a pas pu aboutir. Réessayez plus tard ou consultez les journaux du serveur.",
                    ),
                )
            }
        }
    }
}
