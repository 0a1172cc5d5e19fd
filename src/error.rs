//! Error types for the Freshdesk client.
//!
//! `FreshdeskError` is the single error type returned by every operation.
//! Failures reported by the remote service are carried as an [`ApiError`]
//! whose [`ErrorKind`] discriminates the failure taxonomy.
//!
//! # Security
//!
//! Error messages built from response bodies are sanitized so the API key
//! never ends up in logs. Use `sanitize_message()` when constructing
//! messages from external sources.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::models::FieldError;

/// Kind of failure reported by the Freshdesk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request body or parameters failed remote validation (400).
    Validation,
    /// Missing or invalid credentials (401).
    Authentication,
    /// Authenticated, but not allowed to perform the operation (403).
    AccessDenied,
    /// The identifier does not resolve to a resource (404).
    NotFound,
    /// The HTTP verb is not supported on the endpoint (405).
    MethodNotAllowed,
    /// The `Accept` header was rejected (406).
    UnsupportedAcceptHeader,
    /// The resource state precludes the operation (409).
    ConflictingState,
    /// The `Content-Type` header was rejected (415).
    UnsupportedContentType,
    /// Too many requests (429).
    RateLimitExceeded,
    /// Any other non-success response.
    Api,
}

impl ErrorKind {
    /// Maps an HTTP status code to the failure kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::Validation,
            401 => ErrorKind::Authentication,
            403 => ErrorKind::AccessDenied,
            404 => ErrorKind::NotFound,
            405 => ErrorKind::MethodNotAllowed,
            406 => ErrorKind::UnsupportedAcceptHeader,
            409 => ErrorKind::ConflictingState,
            415 => ErrorKind::UnsupportedContentType,
            429 => ErrorKind::RateLimitExceeded,
            _ => ErrorKind::Api,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation failed",
            ErrorKind::Authentication => "authentication failed",
            ErrorKind::AccessDenied => "access denied",
            ErrorKind::NotFound => "not found",
            ErrorKind::MethodNotAllowed => "method not allowed",
            ErrorKind::UnsupportedAcceptHeader => "unsupported accept header",
            ErrorKind::ConflictingState => "conflicting state",
            ErrorKind::UnsupportedContentType => "unsupported content type",
            ErrorKind::RateLimitExceeded => "rate limit exceeded",
            ErrorKind::Api => "API error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failure reported by the Freshdesk API.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} (HTTP {status}): {message}")]
pub struct ApiError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// HTTP status code of the response.
    pub status: u16,
    /// Message extracted from the response body (sanitized).
    pub message: String,
    /// Per-field validation errors, if the service sent any.
    pub errors: Vec<FieldError>,
    /// Delay requested by the service before retrying, if any.
    pub retry_after: Option<Duration>,
}

impl ApiError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            errors: Vec::new(),
            retry_after: None,
        }
    }

    /// Creates an error whose kind is derived from the HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::from_status(status), status, message)
    }

    /// Validation failure (400).
    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self::new(ErrorKind::Validation, 400, message).with_errors(errors)
    }

    /// Authentication failure (401).
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, 401, message)
    }

    /// Access-denied failure (403).
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccessDenied, 403, message)
    }

    /// Not-found failure (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, 404, message)
    }

    /// Method-not-allowed failure (405).
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, 405, message)
    }

    /// Unsupported accept header failure (406).
    pub fn unsupported_accept_header(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedAcceptHeader, 406, message)
    }

    /// Conflicting-state failure (409).
    pub fn conflicting_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConflictingState, 409, message)
    }

    /// Unsupported content type failure (415).
    pub fn unsupported_content_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedContentType, 415, message)
    }

    /// Rate-limit failure (429).
    pub fn rate_limit_exceeded(retry_after: Option<Duration>) -> Self {
        Self {
            retry_after,
            ..Self::new(
                ErrorKind::RateLimitExceeded,
                429,
                "too many requests - please wait before retrying",
            )
        }
    }

    /// Catch-all for other non-success responses.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Api, status, message)
    }

    /// Attaches per-field validation errors.
    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }

    /// Attaches a retry delay.
    pub fn with_retry_after(mut self, retry_after: Option<Duration>) -> Self {
        self.retry_after = retry_after;
        self
    }
}

/// Unified error type for all client operations.
#[derive(Error, Debug)]
pub enum FreshdeskError {
    /// Configuration error - missing or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {duration:?} ({operation})")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input was rejected locally, before anything was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Connection test failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// Details about why the connection test failed.
        message: String,
    },

    /// The Freshdesk API returned a failure response.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FreshdeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshdeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshdeskError::Config(message.into())
    }

    /// Creates a local input rejection.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        FreshdeskError::InvalidInput(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        FreshdeskError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        FreshdeskError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns the API failure kind, if this error came from the service.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            FreshdeskError::Api(e) => Some(e.kind),
            _ => None,
        }
    }

    /// Returns the API failure details, if this error came from the service.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            FreshdeskError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if the service reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }

    /// Returns true if this is a rate limit error, indicating the caller should back off.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        self.kind() == Some(ErrorKind::RateLimitExceeded)
    }

    /// Returns true if the failure is transient.
    ///
    /// The client never retries by itself; this is for callers that do.
    /// Transient failures are rate limiting, 5xx responses and timeouts.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            FreshdeskError::Timeout { .. } => true,
            FreshdeskError::Http(e) => e.is_timeout() || e.is_connect(),
            FreshdeskError::Api(e) => {
                e.kind == ErrorKind::RateLimitExceeded || (500..600).contains(&e.status)
            }
            _ => false,
        }
    }

    /// Returns the delay suggested by the service before retrying, if any.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            FreshdeskError::Api(e) => e.retry_after,
            _ => None,
        }
    }

    /// Replaces every occurrence of the API key in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = FreshdeskError::missing_env("FRESHDESK_API_KEY");
        assert!(err.to_string().contains("FRESHDESK_API_KEY"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_kind_from_status_table() {
        let table = [
            (400, ErrorKind::Validation),
            (401, ErrorKind::Authentication),
            (403, ErrorKind::AccessDenied),
            (404, ErrorKind::NotFound),
            (405, ErrorKind::MethodNotAllowed),
            (406, ErrorKind::UnsupportedAcceptHeader),
            (409, ErrorKind::ConflictingState),
            (415, ErrorKind::UnsupportedContentType),
            (429, ErrorKind::RateLimitExceeded),
            (418, ErrorKind::Api),
            (500, ErrorKind::Api),
            (502, ErrorKind::Api),
        ];
        for (status, kind) in table {
            assert_eq!(ErrorKind::from_status(status), kind, "status {}", status);
        }
    }

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(ApiError::not_found("x").status, 404);
        assert_eq!(ApiError::conflicting_state("x").status, 409);
        assert_eq!(
            ApiError::unsupported_content_type("x").kind,
            ErrorKind::UnsupportedContentType
        );
        assert_eq!(ApiError::api(502, "bad gateway").kind, ErrorKind::Api);
    }

    #[test]
    fn test_api_error_display() {
        let err: FreshdeskError =
            ApiError::not_found("There is no resource matching the request").into();
        assert_eq!(
            err.to_string(),
            "not found (HTTP 404): There is no resource matching the request"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_input_has_no_kind() {
        let err = FreshdeskError::invalid_input("id is required");
        assert_eq!(err.kind(), None);
        assert_eq!(err.to_string(), "invalid input: id is required");
    }

    #[test]
    fn test_is_retryable_rate_limited() {
        let err: FreshdeskError =
            ApiError::rate_limit_exceeded(Some(Duration::from_secs(5))).into();
        assert!(err.is_retryable());
        assert!(err.is_rate_limit());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_is_retryable_server_error() {
        let err: FreshdeskError = ApiError::api(503, "unavailable").into();
        assert!(err.is_retryable());
        assert!(!err.is_rate_limit());
    }

    #[test]
    fn test_not_retryable_client_errors() {
        let err: FreshdeskError = ApiError::validation("Validation failed", vec![]).into();
        assert!(!err.is_retryable());
        assert!(!FreshdeskError::invalid_input("bad").is_retryable());
    }

    #[test]
    fn test_timeout_error() {
        let err = FreshdeskError::timeout(Duration::from_secs(30), "GET /tickets");
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("30s"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreshdeskError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        assert_eq!(FreshdeskError::sanitize_message(message, ""), message);
    }

    #[test]
    fn test_connection_test_error() {
        let err = FreshdeskError::connection_test("Could not reach server");
        let msg = err.to_string();
        assert!(msg.contains("connection test failed"));
        assert!(msg.contains("Could not reach server"));
    }
}
