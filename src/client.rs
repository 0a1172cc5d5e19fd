//! HTTP client for the Freshdesk API.
//!
//! This module provides `FreshdeskClient`, the reqwest-backed
//! [`Dispatch`] implementation used by the resource facades.
//!
//! Each call is a single request/response round trip. Nothing is retried;
//! callers that want retries can consult
//! [`FreshdeskError::is_retryable`] and [`FreshdeskError::retry_after`].
//!
//! # Security
//!
//! The API key is never logged. Error bodies are sanitized before they are
//! stored in an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::dispatch::Dispatch;
use crate::error::{ApiError, ErrorKind, FreshdeskError};
use crate::models::{ErrorBody, Query, Record};
use crate::resources::Resources;

/// Path of the REST API below the account URL.
const API_PATH: &str = "/api/v2";

/// Password sent alongside the API key in basic auth.
const API_KEY_PASSWORD: &str = "X";

/// The Accept header value for the JSON API.
const JSON_ACCEPT_HEADER: &str = "application/json";

/// Maximum length for HTTP error response bodies kept in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Freshdesk API.
///
/// Handles authentication, request formatting and response decoding.
/// Resource facades are available through the [`Resources`] trait.
///
/// # Example
///
/// ```ignore
/// use freshdesk::prelude::*;
///
/// let config = Config::from_env()?;
/// let client = FreshdeskClient::new(&config)?;
///
/// let group = client.groups().view(42, None).await?;
/// ```
#[derive(Clone)]
pub struct FreshdeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the API (e.g., `https://acme.freshdesk.com/api/v2`).
    base_url: String,

    /// Timeout applied to every request, kept for error reporting.
    timeout: Duration,

    /// API key for authentication.
    /// SECURITY: Never log this value!
    api_key: String,
}

impl FreshdeskClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshdeskError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FreshdeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(&config.base_url),
            timeout: config.timeout,
            api_key: config.api_key().to_string(),
        })
    }

    /// Normalizes the base URL to ensure it includes the API path.
    fn normalize_base_url(url: &str) -> String {
        let url = url.trim_end_matches('/');
        if url.ends_with(API_PATH) {
            url.to_string()
        } else if url.ends_with("/api") {
            format!("{}/v2", url)
        } else {
            format!("{}{}", url, API_PATH)
        }
    }

    /// Returns the API base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the web URL for viewing a ticket in the helpdesk UI.
    pub fn ticket_web_url(&self, ticket_id: &str) -> String {
        let web_base = self.base_url.trim_end_matches(API_PATH);
        format!("{}/a/tickets/{}", web_base, urlencoding::encode(ticket_id))
    }

    /// Tests connectivity to the account.
    ///
    /// Fetches the authenticated agent to verify the server is reachable and
    /// the API key is accepted.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::ConnectionTest` with details about the failure.
    pub async fn test_connection(&self) -> Result<(), FreshdeskError> {
        tracing::debug!("Testing connection to Freshdesk");

        match self.agents().current().await {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(FreshdeskError::Api(e)) if e.kind == ErrorKind::Authentication => Err(
                FreshdeskError::connection_test("authentication failed - verify FRESHDESK_API_KEY"),
            ),
            Err(FreshdeskError::Timeout { duration, .. }) => {
                Err(FreshdeskError::connection_test(format!(
                    "connection timed out after {:?} - verify FRESHDESK_DOMAIN is reachable",
                    duration
                )))
            }
            Err(FreshdeskError::Http(e)) => {
                let message = FreshdeskError::sanitize_message(&e.to_string(), &self.api_key);
                Err(FreshdeskError::connection_test(format!(
                    "HTTP error: {} - verify FRESHDESK_DOMAIN",
                    message
                )))
            }
            Err(e) => Err(FreshdeskError::connection_test(
                e.sanitized_display(&self.api_key),
            )),
        }
    }

    fn url(&self, endpoint: &str, query: Option<&Query>) -> String {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}{}?{}", self.base_url, endpoint, query.encode()),
            None => format!("{}{}", self.base_url, endpoint),
        }
    }

    /// Converts a non-success response into an [`ApiError`].
    async fn handle_http_error(&self, status: StatusCode, response: reqwest::Response) -> ApiError {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response.text().await.unwrap_or_default();
        let body = FreshdeskError::sanitize_message(&body, &self.api_key);

        let parsed = ErrorBody::parse(&body).unwrap_or_default();
        let message = parsed
            .summary()
            .unwrap_or_else(|| Self::fallback_message(status, &body));

        let kind = ErrorKind::from_status(status.as_u16());
        if kind == ErrorKind::RateLimitExceeded {
            tracing::warn!(retry_after = ?retry_after, "Rate limited by Freshdesk");
        }

        ApiError::new(kind, status.as_u16(), message)
            .with_errors(parsed.errors)
            .with_retry_after(retry_after)
    }

    /// Message for error responses without a JSON body, truncated so
    /// verbose server pages are not carried around.
    fn fallback_message(status: StatusCode, body: &str) -> String {
        let body = body.trim();
        if body.is_empty() {
            return status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string();
        }
        if body.len() > MAX_ERROR_BODY_LEN {
            let mut end = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...[truncated]", &body[..end])
        } else {
            body.to_string()
        }
    }
}

#[async_trait]
impl Dispatch for FreshdeskClient {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Record>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        let url = self.url(endpoint, query);

        tracing::debug!(
            method = %method,
            endpoint = %endpoint,
            has_query = query.is_some_and(|q| !q.is_empty()),
            has_body = body.is_some(),
            "Making Freshdesk API request"
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.api_key, Some(API_KEY_PASSWORD))
            .header(ACCEPT, JSON_ACCEPT_HEADER);

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return FreshdeskError::timeout(self.timeout, format!("{} {}", method, endpoint));
            }
            FreshdeskError::Http(e)
        })?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await.into());
        }

        let text = response.text().await.map_err(FreshdeskError::Http)?;

        tracing::trace!(body = %text, "Freshdesk API response");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(FreshdeskError::Serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a client for unit tests without requiring Config/env vars.
    fn test_client() -> FreshdeskClient {
        FreshdeskClient {
            http: Client::new(),
            base_url: "https://acme.freshdesk.com/api/v2".to_string(),
            timeout: Duration::from_secs(30),
            api_key: "test_key".to_string(),
        }
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            FreshdeskClient::normalize_base_url("https://acme.freshdesk.com"),
            "https://acme.freshdesk.com/api/v2"
        );
        assert_eq!(
            FreshdeskClient::normalize_base_url("https://acme.freshdesk.com/"),
            "https://acme.freshdesk.com/api/v2"
        );
        assert_eq!(
            FreshdeskClient::normalize_base_url("https://acme.freshdesk.com/api/v2/"),
            "https://acme.freshdesk.com/api/v2"
        );
        assert_eq!(
            FreshdeskClient::normalize_base_url("https://acme.freshdesk.com/api"),
            "https://acme.freshdesk.com/api/v2"
        );
    }

    #[test]
    fn test_url_with_and_without_query() {
        let client = test_client();
        assert_eq!(
            client.url("/tickets", None),
            "https://acme.freshdesk.com/api/v2/tickets"
        );
        assert_eq!(
            client.url("/tickets", Some(&Query::new())),
            "https://acme.freshdesk.com/api/v2/tickets"
        );
        let query = Query::new().with("filter", "deleted").page(2);
        assert_eq!(
            client.url("/tickets", Some(&query)),
            "https://acme.freshdesk.com/api/v2/tickets?filter=deleted&page=2"
        );
    }

    #[test]
    fn test_ticket_web_url_encodes_id() {
        let client = test_client();
        assert_eq!(
            client.ticket_web_url("12345"),
            "https://acme.freshdesk.com/a/tickets/12345"
        );
        let url = client.ticket_web_url("123&evil=true");
        assert!(url.ends_with("123%26evil%3Dtrue"));
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(
            FreshdeskClient::fallback_message(StatusCode::BAD_GATEWAY, ""),
            "Bad Gateway"
        );
        let long = "x".repeat(MAX_ERROR_BODY_LEN + 10);
        let message = FreshdeskClient::fallback_message(StatusCode::INTERNAL_SERVER_ERROR, &long);
        assert!(message.ends_with("...[truncated]"));
        assert_eq!(message.len(), MAX_ERROR_BODY_LEN + "...[truncated]".len());
    }

    #[test]
    fn test_new_from_config() {
        let config = Config::new("acme", "abc123def456").unwrap();
        let client = FreshdeskClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://acme.freshdesk.com/api/v2");
    }
}
