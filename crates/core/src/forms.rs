//! Request-boundary field coercion.
//!
//! Submitted records arrive with string-typed numeric fields and blank
//! optional fields. All coercion happens here, once, so repositories and
//! handlers only ever see fully-defaulted typed values: blank or missing
//! counters become 0, blank optional strings become `None`.

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;

/// Raw numeric field as submitted: either already a number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Int(i64),
    Text(String),
}

/// Deserialize a counter field, coercing blank/null/missing to 0.
///
/// Use together with `#[serde(default)]` so absent fields also read as 0.
pub fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawCount>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawCount::Int(n)) => Ok(n),
        Some(RawCount::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0)
            } else {
                trimmed
                    .parse::<i64>()
                    .map_err(|_| DeError::custom(format!("invalid numeric field: {s:?}")))
            }
        }
    }
}

/// Deserialize an optional numeric field, coercing blank/null to `None`.
pub fn opt_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawCount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawCount::Int(n)) => Ok(Some(n)),
        Some(RawCount::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| DeError::custom(format!("invalid numeric field: {s:?}")))
            }
        }
    }
}

/// Deserialize an optional string field, coercing blank/null to `None`.
pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }
}

/// Check that a required string field is present and non-blank.
///
/// Returns a user-facing guidance message on failure, suitable for a 400
/// response.
pub fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "count")]
        seats: i64,
        #[serde(default, deserialize_with = "opt_count")]
        year: Option<i64>,
        #[serde(default, deserialize_with = "optional")]
        remarks: Option<String>,
    }

    fn parse(json: &str) -> Form {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn count_accepts_plain_numbers() {
        assert_eq!(parse(r#"{"seats": 12}"#).seats, 12);
    }

    #[test]
    fn count_accepts_numeric_strings() {
        assert_eq!(parse(r#"{"seats": "12"}"#).seats, 12);
    }

    #[test]
    fn count_coerces_blank_to_zero() {
        assert_eq!(parse(r#"{"seats": ""}"#).seats, 0);
        assert_eq!(parse(r#"{"seats": "  "}"#).seats, 0);
    }

    #[test]
    fn count_coerces_null_and_missing_to_zero() {
        assert_eq!(parse(r#"{"seats": null}"#).seats, 0);
        assert_eq!(parse(r#"{}"#).seats, 0);
    }

    #[test]
    fn count_rejects_garbage() {
        let result: Result<Form, _> = serde_json::from_str(r#"{"seats": "many"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn opt_count_keeps_values_and_drops_blanks() {
        assert_eq!(parse(r#"{"year": "2023"}"#).year, Some(2023));
        assert_eq!(parse(r#"{"year": ""}"#).year, None);
        assert_eq!(parse(r#"{}"#).year, None);
    }

    #[test]
    fn optional_trims_and_drops_blanks() {
        assert_eq!(
            parse(r#"{"remarks": " fine "}"#).remarks.as_deref(),
            Some("fine")
        );
        assert_eq!(parse(r#"{"remarks": "   "}"#).remarks, None);
        assert_eq!(parse(r#"{"remarks": null}"#).remarks, None);
    }

    #[test]
    fn require_rejects_blank() {
        assert!(require("name", "").is_err());
        assert!(require("name", "  ").is_err());
        assert_eq!(
            require("roll_no", " ").unwrap_err(),
            "roll_no is required"
        );
        assert!(require("name", "A").is_ok());
    }
}
