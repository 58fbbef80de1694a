use thiserror::Error;

/// Errors that can occur when parsing a Thing request body.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Field '{0}' is reserved for storage keys")]
    ReservedField(String),
}
