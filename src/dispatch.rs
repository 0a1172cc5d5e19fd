//! The request-dispatch seam between resource facades and HTTP.
//!
//! Facades never talk to the network directly. They build an endpoint with
//! [`Dispatch::create_endpoint`] and hand it to [`Dispatch::request`]; the
//! implementation owns transport, authentication and mapping of HTTP
//! statuses to [`ErrorKind`](crate::error::ErrorKind)s.
//! [`FreshdeskClient`](crate::client::FreshdeskClient) is the reqwest-backed
//! implementation.

use async_trait::async_trait;
pub use reqwest::Method;
use serde_json::Value;

use crate::error::FreshdeskError;
use crate::models::{Query, Record};

/// Performs API requests on behalf of the resource facades.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Performs one request and returns the decoded response payload.
    ///
    /// `body` is sent as the JSON request payload when present and `query`
    /// is encoded as URL query parameters when present. A successful
    /// response without a body decodes to `Value::Null`.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Record>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError>;

    /// Joins a resource base path with an optional identifier or sub-path.
    fn create_endpoint(&self, base_path: &str, suffix: Option<&str>) -> String {
        join_endpoint(base_path, suffix)
    }
}

/// Joins `base_path` and `suffix` with exactly one `/` between them.
///
/// The result always starts with `/`. An absent or empty suffix yields the
/// base path alone.
pub fn join_endpoint(base_path: &str, suffix: Option<&str>) -> String {
    let base = base_path.trim_end_matches('/');
    let mut endpoint = if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{}", base)
    };

    if let Some(suffix) = suffix
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
    {
        endpoint.push('/');
        endpoint.push_str(suffix);
    }

    endpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base_only() {
        assert_eq!(join_endpoint("/groups", None), "/groups");
        assert_eq!(join_endpoint("/groups", Some("")), "/groups");
    }

    #[test]
    fn test_join_with_id() {
        assert_eq!(join_endpoint("/groups", Some("42")), "/groups/42");
    }

    #[test]
    fn test_join_with_sub_path() {
        assert_eq!(
            join_endpoint("/tickets", Some("7/restore")),
            "/tickets/7/restore"
        );
    }

    #[test]
    fn test_join_normalizes_slashes() {
        assert_eq!(join_endpoint("ticket_fields", None), "/ticket_fields");
        assert_eq!(join_endpoint("/tickets/", Some("/7")), "/tickets/7");
    }
}
