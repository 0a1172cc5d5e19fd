//! Resource identifiers.

use std::fmt;

use crate::error::FreshdeskError;

/// Identifier of a single remote resource.
///
/// Freshdesk identifiers are numeric. Any type convertible into a
/// `ResourceId` can be passed to the facades; the value is checked when
/// the endpoint is built, so malformed input never reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Returns the identifier as it will appear in the path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks that the identifier is a non-empty string of ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::InvalidInput` otherwise.
    pub fn validate(&self) -> Result<&str, FreshdeskError> {
        if self.0.is_empty() {
            return Err(FreshdeskError::invalid_input("id is required"));
        }
        if !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FreshdeskError::invalid_input(format!(
                "id must be numeric, got: {:?}",
                self.0.chars().take(50).collect::<String>()
            )));
        }
        Ok(&self.0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ResourceId {
                fn from(id: $ty) -> Self {
                    ResourceId(id.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u32, u64, i32, i64, usize);

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId(id.trim().to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::from(id.as_str())
    }
}

impl From<&String> for ResourceId {
    fn from(id: &String) -> Self {
        ResourceId::from(id.as_str())
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(id: &ResourceId) -> Self {
        id.clone()
    }
}
