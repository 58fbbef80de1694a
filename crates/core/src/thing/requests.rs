//! Request parsing and validation for Thing handlers.
//!
//! Following the Functional Core pattern, these functions take raw request
//! pieces and return plain values or errors; they never touch storage.

use serde::{Deserialize, Serialize};

use super::error::RequestError;
use super::types::ThingData;

/// Error code returned when Read finds nothing.
const THING_NOT_FOUND_ERROR: &str = "ThingNotfound";
/// Message returned when Read finds nothing.
const THING_NOT_FOUND_MESSAGE: &str = "Thing not found";
/// Error code returned when the upsert ids disagree.
const BAD_REQUEST_ERROR: &str = "BadRequest";
/// Message returned when the upsert ids disagree.
const ID_MISMATCH_MESSAGE: &str = "Request id does not match payload id";

/// Parse a request body into [`ThingData`].
///
/// A missing or blank body is treated as `{}`. Bodies using a key attribute
/// name as a field are rejected.
pub fn parse_thing_data(body: &[u8]) -> Result<ThingData, RequestError> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        body
    };

    let data: ThingData = serde_json::from_slice(body)?;

    if let Some(name) = data.reserved_field() {
        return Err(RequestError::ReservedField(name.to_string()));
    }

    Ok(data)
}

/// Check that the body id of an upsert matches the path id.
///
/// A body without an id never matches.
pub fn ids_match(path_id: &str, data: &ThingData) -> bool {
    data.id.as_deref() == Some(path_id)
}

/// Body of a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Body acknowledging an upsert or delete with the caller's trace id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestIdResponse {
    pub request_id: String,
}

/// Structured client-facing error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn thing_not_found() -> Self {
        Self {
            error: THING_NOT_FOUND_ERROR.to_string(),
            message: THING_NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn id_mismatch() -> Self {
        Self {
            error: BAD_REQUEST_ERROR.to_string(),
            message: ID_MISMATCH_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(parse_thing_data(b"").unwrap(), ThingData::default());
        assert_eq!(parse_thing_data(b"  \n").unwrap(), ThingData::default());
    }

    #[test]
    fn test_parse_body_with_fields() {
        let data = parse_thing_data(br#"{"id": "abc", "color": "red"}"#).unwrap();

        assert_eq!(data.id.as_deref(), Some("abc"));
        assert_eq!(data.fields["color"], json!("red"));
    }

    #[test]
    fn test_parse_malformed_body() {
        let result = parse_thing_data(b"{not json");
        assert!(matches!(result, Err(RequestError::Malformed(_))));
    }

    #[test]
    fn test_parse_non_object_body() {
        let result = parse_thing_data(b"[1, 2, 3]");
        assert!(matches!(result, Err(RequestError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_key_attributes() {
        let result = parse_thing_data(br#"{"pk": "thing#other"}"#);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Field 'pk' is reserved for storage keys"
        );
    }

    #[test]
    fn test_ids_match() {
        assert!(ids_match("abc", &ThingData::with_id("abc")));
        assert!(!ids_match("abc", &ThingData::with_id("xyz")));
        assert!(!ids_match("abc", &ThingData::default()));
    }

    #[test]
    fn test_error_bodies() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::thing_not_found()).unwrap(),
            json!({"error": "ThingNotfound", "message": "Thing not found"})
        );
        assert_eq!(
            serde_json::to_value(ErrorResponse::id_mismatch()).unwrap(),
            json!({"error": "BadRequest", "message": "Request id does not match payload id"})
        );
    }
}
