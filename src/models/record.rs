//! Opaque record payloads.
//!
//! A record is whatever JSON object the service defines for a resource.
//! The client never validates or reshapes it.

use serde::Serialize;
use serde_json::Value;

use crate::error::FreshdeskError;

/// A resource payload: a JSON object of field name to value.
pub type Record = serde_json::Map<String, Value>;

/// Converts a serializable value into a [`Record`].
///
/// # Errors
///
/// Returns `FreshdeskError::InvalidInput` if the value does not serialize
/// to a JSON object (for example `None` or `()` serialize to `null`).
///
/// # Example
///
/// ```
/// use freshdesk::models::to_record;
/// use serde_json::json;
///
/// let record = to_record(&json!({"name": "Billing"})).unwrap();
/// assert_eq!(record["name"], "Billing");
/// ```
pub fn to_record<T>(value: &T) -> Result<Record, FreshdeskError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Err(FreshdeskError::invalid_input("record data is required")),
        other => Err(FreshdeskError::invalid_input(format!(
            "record data must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct NewGroup<'a> {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<&'a str>,
    }

    #[test]
    fn test_to_record_from_struct() {
        let record = to_record(&NewGroup {
            name: "Billing",
            description: None,
        })
        .unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record["name"], "Billing");
    }

    #[test]
    fn test_to_record_rejects_null() {
        let err = to_record(&Option::<Record>::None).unwrap_err();
        assert!(matches!(err, FreshdeskError::InvalidInput(_)));
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_to_record_rejects_non_objects() {
        let err = to_record(&json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(to_record("subject").is_err());
    }
}
