//! Error payloads returned by the Freshdesk API.
//!
//! Failed requests usually carry a JSON body like:
//!
//! ```json
//! {
//!   "description": "Validation failed",
//!   "errors": [
//!     {
//!       "field": "email",
//!       "message": "It should be a valid email address",
//!       "code": "invalid_value"
//!     }
//!   ]
//! }
//! ```
//!
//! while authentication failures use a flat `code`/`message` pair. All
//! fields are optional so that any of these shapes decode.

use serde::{Deserialize, Serialize};

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field.
    #[serde(default)]
    pub field: Option<String>,

    /// Human-readable description of the problem.
    #[serde(default)]
    pub message: String,

    /// Machine-readable error code (e.g., `invalid_value`, `missing_field`).
    #[serde(default)]
    pub code: Option<String>,
}

/// Decoded error response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Summary of the failure (e.g., "Validation failed").
    #[serde(default)]
    pub description: Option<String>,

    /// Error code for non-validation failures.
    #[serde(default)]
    pub code: Option<String>,

    /// Error message for non-validation failures.
    #[serde(default)]
    pub message: Option<String>,

    /// Field-level errors.
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    /// Parses an error body, returning `None` if it is not JSON.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Best human-readable summary of the failure.
    pub fn summary(&self) -> Option<String> {
        let head = self
            .description
            .as_deref()
            .or(self.message.as_deref())
            .or(self.code.as_deref())?;

        if self.errors.is_empty() {
            return Some(head.to_string());
        }

        let details = self
            .errors
            .iter()
            .map(|e| match &e.field {
                Some(field) => format!("{}: {}", field, e.message),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        Some(format!("{} ({})", head, details))
    }
}
