//! Configuration management for the Freshdesk client.
//!
//! Configuration can be built programmatically with [`Config::new`] or
//! loaded from environment variables with [`Config::from_env`].

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::FreshdeskError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Host suffix appended to bare account subdomains.
const FRESHDESK_HOST_SUFFIX: &str = "freshdesk.com";

/// API key values that are only ever copied from examples.
const PLACEHOLDER_KEYS: [&str; 5] = [
    "api_key",
    "apikey",
    "placeholder",
    "changeme",
    "replace_me",
];

/// Configuration for connecting to a Freshdesk account.
///
/// The API key is stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Account base URL without the API path (e.g., `https://acme.freshdesk.com`).
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// API key for authentication.
    /// This value must never be logged or included in error messages.
    api_key: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Builds a configuration for an account.
    ///
    /// `domain` may be a bare account name (`acme`), a host name
    /// (`support.acme.com`) or a full `http(s)://` URL.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if the domain or the API key
    /// fails validation.
    pub fn new(domain: &str, api_key: impl Into<String>) -> Result<Self, FreshdeskError> {
        let api_key = api_key.into();
        let base_url = Self::resolve_base_url(domain)?;
        Self::validate_api_key(&api_key)?;

        Ok(Config {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `FRESHDESK_DOMAIN`: account name, host or URL
    /// - `FRESHDESK_API_KEY`: API key of the agent the client acts as
    ///
    /// # Optional
    ///
    /// - `FRESHDESK_TIMEOUT_SECS`: request timeout (default 30)
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, FreshdeskError> {
        let domain = Self::get_required_env("FRESHDESK_DOMAIN")?;
        let api_key = Self::get_required_env("FRESHDESK_API_KEY")?;

        let mut config = Self::new(&domain, api_key)?;

        if let Ok(raw) = env::var("FRESHDESK_TIMEOUT_SECS") {
            config.timeout = Self::parse_timeout(&raw)?;
        }

        Ok(config)
    }

    /// Reads a `.env` file if one is present, then calls [`Config::from_env`].
    pub fn load() -> Result<Self, FreshdeskError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API key.
    ///
    /// Only the HTTP client and error sanitization should need this.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreshdeskError> {
        env::var(name)
            .map_err(|_| FreshdeskError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FreshdeskError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    fn parse_timeout(raw: &str) -> Result<Duration, FreshdeskError> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(FreshdeskError::invalid_config(
                "FRESHDESK_TIMEOUT_SECS must be a positive number of seconds",
            )),
        }
    }

    /// Turns an account name, host or URL into a normalized base URL.
    fn resolve_base_url(domain: &str) -> Result<String, FreshdeskError> {
        let domain = domain.trim();

        if domain.is_empty() {
            return Err(FreshdeskError::invalid_config("domain must not be empty"));
        }

        let scheme = ["https://", "http://"]
            .into_iter()
            .find(|scheme| domain.starts_with(scheme));

        let candidate = match scheme {
            Some(scheme) => {
                let rest = domain[scheme.len()..].trim_end_matches('/');
                if rest.is_empty() || rest.starts_with('/') {
                    return Err(FreshdeskError::invalid_config("domain must include a host"));
                }
                format!("{}{}", scheme, rest)
            }
            None => {
                let domain = domain.trim_end_matches('/');
                if domain.is_empty() || domain.starts_with(':') || domain.contains("://") {
                    return Err(FreshdeskError::invalid_config(format!(
                        "invalid domain: {:?}",
                        domain
                    )));
                }
                if domain.contains('.') || domain.contains(':') {
                    format!("https://{}", domain)
                } else {
                    if !domain
                        .bytes()
                        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
                    {
                        return Err(FreshdeskError::invalid_config(format!(
                            "invalid account name: {:?}",
                            domain
                        )));
                    }
                    format!("https://{}.{}", domain, FRESHDESK_HOST_SUFFIX)
                }
            }
        };

        let parsed = Url::parse(&candidate)
            .map_err(|e| FreshdeskError::invalid_config(format!("invalid domain: {}", e)))?;
        match parsed.host_str() {
            Some(host) if !host.is_empty() && !matches!(host, "http" | "https") => Ok(candidate),
            _ => Err(FreshdeskError::invalid_config("domain must include a host")),
        }
    }

    /// Validates the API key is not empty or a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), FreshdeskError> {
        if key.trim().is_empty() {
            return Err(FreshdeskError::invalid_config("API key must not be empty"));
        }

        let key_lower = key.trim().to_lowercase();
        let is_placeholder = PLACEHOLDER_KEYS.contains(&key_lower.as_str())
            || key_lower.starts_with("your_")
            || key_lower.starts_with('<')
            || key_lower.bytes().all(|b| b == b'x');

        if is_placeholder {
            return Err(FreshdeskError::invalid_config(
                "FRESHDESK_API_KEY appears to be a placeholder value",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bare_account_name() {
        let url = Config::resolve_base_url("acme").unwrap();
        assert_eq!(url, "https://acme.freshdesk.com");
    }

    #[test]
    fn test_resolve_host_name() {
        let url = Config::resolve_base_url("support.acme.com/").unwrap();
        assert_eq!(url, "https://support.acme.com");
    }

    #[test]
    fn test_resolve_full_url_keeps_scheme() {
        let url = Config::resolve_base_url("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        assert!(Config::resolve_base_url("").is_err());
        assert!(Config::resolve_base_url("acme corp").is_err());
        assert!(Config::resolve_base_url("https://").is_err());
    }

    #[test]
    fn test_resolve_rejects_scheme_without_host() {
        for domain in ["http://", "https:///", "https:///acme", "http:", "https:", "://acme"] {
            let err = Config::resolve_base_url(domain).unwrap_err();
            assert!(matches!(err, FreshdeskError::Config(_)), "{:?} -> {:?}", domain, err);
        }
    }

    #[test]
    fn test_resolve_full_https_url_trims_slashes() {
        let url = Config::resolve_base_url("https://acme.freshdesk.com//").unwrap();
        assert_eq!(url, "https://acme.freshdesk.com");
    }

    #[test]
    fn test_validate_api_key_rejects_placeholder() {
        assert!(Config::validate_api_key("your_api_key_here").is_err());
        assert!(Config::validate_api_key("   ").is_err());
        assert!(Config::validate_api_key("CHANGEME").is_err());
        assert!(Config::validate_api_key("xxxxxxxxxxxx").is_err());
        assert!(Config::validate_api_key("<api key>").is_err());
    }

    #[test]
    fn test_validate_api_key_accepts_keys_containing_placeholder_words() {
        assert!(Config::validate_api_key("aBxXx9Kq2LmN0pQrStUv").is_ok());
        assert!(Config::validate_api_key("Zk4placeholder9Q").is_ok());
    }

    #[test]
    fn test_validate_api_key_accepts_real_key() {
        assert!(Config::validate_api_key("abc123def456").is_ok());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(Config::parse_timeout("10").unwrap(), Duration::from_secs(10));
        assert!(Config::parse_timeout("0").is_err());
        assert!(Config::parse_timeout("soon").is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("acme", "abc123def456").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("abc123def456"));
        assert!(debug.contains("[REDACTED]"));
        assert_eq!(config.api_key(), "abc123def456");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
