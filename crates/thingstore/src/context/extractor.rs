//! Axum extractor for RequestContext.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use super::types::{RequestContext, RequestId};

/// Header carrying the caller-assigned trace id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(RequestId::from_header)
        .unwrap_or_default()
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = extract_request_id(&parts.headers);
        Ok(RequestContext { request_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_extract_request_id_from_header() {
        let mut headers = HeaderMap::new();
        let id = "c6af9ac6-7b61-11e6-9a41-93e8deadbeef";
        headers.insert("x-request-id", id.parse().unwrap());

        let request_id = extract_request_id(&headers);
        assert_eq!(request_id.to_string(), id);
    }

    #[test]
    fn test_extract_request_id_accepts_any_token() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "trace-42".parse().unwrap());

        let request_id = extract_request_id(&headers);
        assert_eq!(request_id.to_string(), "trace-42");
    }

    #[test]
    fn test_extract_request_id_generates_when_missing() {
        let headers = HeaderMap::new();
        let request_id = extract_request_id(&headers);

        Uuid::parse_str(&request_id.to_string()).expect("Should be valid UUID");
    }

    #[test]
    fn test_extract_request_id_generates_when_blank() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "   ".parse().unwrap());

        let request_id = extract_request_id(&headers);

        Uuid::parse_str(&request_id.to_string()).expect("Should be valid UUID");
    }
}
