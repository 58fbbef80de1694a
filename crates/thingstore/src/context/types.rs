//! Pure types for request-scoped context.

use uuid::Uuid;

/// Caller-assigned identifier for a request, used for tracing and echoed
/// back in acknowledgement bodies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generates a fresh identifier for requests that did not carry one.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_header(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context available to all handlers.
///
/// Complements `AppState` (application-scoped) with request-specific data.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Trace identifier of the request.
    pub request_id: RequestId,
}
