//! The HTTP client that executes [ApiCall] descriptions.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{Error, api::ApiCall};

/// How long to wait for the backend before giving up on a call.
const BACKEND_TIMEOUT: Duration = Duration::from_secs(30);

/// A handle on the external REST backend.
///
/// Cheap to clone: the underlying [reqwest::Client] is an `Arc` around a
/// connection pool.
#[derive(Debug, Clone)]
pub struct Backend {
    client: Client,
    base_url: Url,
}

impl Backend {
    /// Create a backend client for the service at `base_url`.
    ///
    /// `base_url` should be an origin such as `http://127.0.0.1:3001`; call
    /// endpoints are absolute paths joined onto it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(BACKEND_TIMEOUT)
            .build()
            .map_err(|error| Error::BackendRequest(error.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Execute a call and return the raw response on a success status.
    ///
    /// Logs the call's lifecycle: the `requested` event before sending, then
    /// either `succeeded` or `failed`. Does not retry; every failure is
    /// terminal for the current operation attempt.
    pub(crate) async fn send(&self, call: ApiCall) -> Result<reqwest::Response, Error> {
        let url = self
            .base_url
            .join(&call.endpoint)
            .map_err(|error| Error::BackendRequest(error.to_string()))?;

        tracing::debug!(
            event = call.lifecycle.requested,
            method = %call.method,
            endpoint = %call.endpoint,
            "issuing backend call"
        );

        let mut request = self.client.request(call.method.clone(), url);

        if let Some(payload) = &call.payload {
            request = request.json(payload);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(
                    event = call.lifecycle.failed,
                    endpoint = %call.endpoint,
                    "backend call failed: {error}"
                );
                return Err(Error::BackendRequest(error.to_string()));
            }
        };

        let status = response.status();

        if !status.is_success() {
            tracing::error!(
                event = call.lifecycle.failed,
                endpoint = %call.endpoint,
                status = status.as_u16(),
                "backend answered with an error status"
            );

            return Err(if status == reqwest::StatusCode::NOT_FOUND {
                Error::NotFound
            } else {
                Error::BackendStatus {
                    status: status.as_u16(),
                    endpoint: call.endpoint,
                }
            });
        }

        tracing::debug!(
            event = call.lifecycle.succeeded,
            endpoint = %call.endpoint,
            status = status.as_u16(),
            "backend call succeeded"
        );

        Ok(response)
    }

    /// Execute a call and decode the response body as JSON.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, call: ApiCall) -> Result<T, Error> {
        let response = self.send(call).await?;

        response
            .json()
            .await
            .map_err(|error| Error::BackendResponse(error.to_string()))
    }
}
