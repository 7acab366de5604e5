//! HTTP client for the registration API

use std::sync::OnceLock;

use reqwest::StatusCode;

use crate::types::{ErrorBody, RegisterRequest, RegisterResponse};

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API URL
pub fn get_api_url() -> &'static str {
    API_URL
        .get()
        .map(|s| s.as_str())
        .unwrap_or("http://localhost:5000/api")
}

/// Error type for registration API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an error status. The body is kept when it
    /// parses as a structured API reply.
    #[error("registration API returned {status}")]
    Api {
        status: StatusCode,
        body: Option<ErrorBody>,
    },

    /// Transport-level fault, no server reply at all
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Message carried by a structured error reply, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Api {
                body: Some(body), ..
            } => body.message.as_deref(),
            _ => None,
        }
    }
}

/// Client for the registration API
#[derive(Clone)]
pub struct RegistrationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    /// Create a new client against the given API base URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Register a new account.
    ///
    /// Issues exactly one POST to `<endpoint>/auth/register`. Any 2xx reply
    /// is a success; its body may carry a message. An error status becomes
    /// [`ApiError::Api`] with the structured body when one can be read, and
    /// a transport fault becomes [`ApiError::Network`].
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, ApiError> {
        let url = format!("{}/auth/register", self.endpoint);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            // Success bodies vary between deployments; an unparseable one
            // counts as a success without a message.
            let parsed = response.json::<RegisterResponse>().await.unwrap_or_default();
            return Ok(parsed);
        }

        let body = response.json::<ErrorBody>().await.ok();
        Err(ApiError::Api { status, body })
    }
}

/// Create a client for requests made from the UI.
///
/// On the server the `API_URL` environment variable wins; in the browser
/// the configured (or default) endpoint is used.
pub fn default_client() -> RegistrationClient {
    #[cfg(feature = "server")]
    {
        if let Ok(url) = std::env::var("API_URL") {
            return RegistrationClient::new(url);
        }
    }
    RegistrationClient::new(get_api_url())
}
