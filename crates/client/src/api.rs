//! REST client for the management `/api/queues` endpoint.
//!
//! One authenticated GET per check, with no retry and no request timeout.
//! Every failure is returned to the caller unchanged.

use queuewatch_core::queue::QueueRecord;
use reqwest::StatusCode;
use url::{form_urlencoded, Url};

/// Path prefix of the per-vhost queue listing.
const QUEUES_PATH: &str = "/api/queues/";

/// Basic-auth credential pair.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of logs and debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Errors from the management API layer. All of them are fatal for a check.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured host is not a valid base URL.
    #[error("Invalid management API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with anything other than `200 OK`.
    #[error("{url} - {status}")]
    Status { url: Url, status: StatusCode },

    /// The body is not a JSON array of queue objects.
    #[error("Failed to decode queue list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Build the queue listing URL for `vhost` under `host`.
///
/// The vhost is query-escaped, so the default vhost `/` becomes `%2F`. The
/// listing path is absolute and replaces any path already on `host`.
pub fn queues_url(host: &str, vhost: &str) -> Result<Url, ApiError> {
    let base = Url::parse(host)?;
    let escaped: String = form_urlencoded::byte_serialize(vhost.as_bytes()).collect();
    Ok(base.join(&format!("{QUEUES_PATH}{escaped}"))?)
}

/// HTTP client for one broker's management API.
pub struct ManagementApi {
    client: reqwest::Client,
    host: String,
    credentials: Credentials,
}

impl ManagementApi {
    /// * `host` - API root, e.g. `http://localhost:15672`.
    pub fn new(host: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_client(reqwest::Client::new(), host, credentials)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        host: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            client,
            host: host.into(),
            credentials,
        }
    }

    /// List every queue in `vhost`.
    ///
    /// Sends `GET /api/queues/{vhost}` with Basic authentication and decodes
    /// the JSON array in response order.
    pub async fn list_queues(&self, vhost: &str) -> Result<Vec<QueueRecord>, ApiError> {
        let url = queues_url(&self.host, vhost)?;
        tracing::debug!(url = %url, user = %self.credentials.username, "Fetching queue list");

        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(url = %url, %status, "Management API rejected request");
            return Err(ApiError::Status { url, status });
        }

        let body = response.text().await?;
        let queues: Vec<QueueRecord> = serde_json::from_str(&body)?;
        tracing::debug!(count = queues.len(), "Queue list decoded");

        Ok(queues)
    }
}
