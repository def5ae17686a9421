//! HTTP client for the policy content service

use policy_model::{PolicyDocument, PolicyListItem};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Shown when a failure carries no usable message of its own.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Error body shape used by the service on the policy routes.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success status with a JSON `{"error": ...}` body; the
    /// service-provided message is surfaced as-is.
    #[error("{message}")]
    Service {
        status: StatusCode,
        message: String,
    },

    /// Non-success status without a service-provided message.
    #[error("{context}: {}", .status.as_u16())]
    Status {
        context: &'static str,
        status: StatusCode,
    },

    /// The request produced no usable response: transport failure or a body
    /// that could not be parsed as the expected JSON.
    #[error("{}", UNKNOWN_ERROR)]
    Unreachable(#[from] reqwest::Error),
}

/// Read-only client over the two query operations.
pub struct PolicyClient {
    client: Client,
    base_url: String,
}

impl PolicyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /privacy/all
    pub async fn fetch_policy_list(&self) -> Result<Vec<PolicyListItem>, FetchError> {
        let url = format!("{}/privacy/all", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(service_error(response, "Error fetching policy list", status).await);
        }

        Ok(response.json().await?)
    }

    /// GET /privacy/:key
    pub async fn fetch_policy(&self, key: &str) -> Result<PolicyDocument, FetchError> {
        let url = format!("{}/privacy/{}", self.base_url, key);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(service_error(response, "Error fetching policy", status).await);
        }

        Ok(response.json().await?)
    }
}

/// Prefer the service-provided `{"error": ...}` message; fall back to a
/// status-code description when the body carries none.
async fn service_error(
    response: reqwest::Response,
    context: &'static str,
    status: StatusCode,
) -> FetchError {
    match response.json::<ErrorBody>().await {
        Ok(body) => FetchError::Service {
            status,
            message: body.error,
        },
        Err(_) => FetchError::Status { context, status },
    }
}
