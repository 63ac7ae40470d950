//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Non-2xx response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request body could not be serialized.
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Coarse failure classes used for logging and policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Network or transport failure, including request construction.
    Transport,
    /// The server answered with a non-success status.
    Status,
    /// The body could not be decoded.
    Malformed,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Status => "status",
            FailureKind::Malformed => "malformed",
        }
    }
}

impl FetchError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::RequestError(_) | FetchError::JsonError(_) => FailureKind::Transport,
            FetchError::HttpError { .. } => FailureKind::Status,
            FetchError::ParseError(_) => FailureKind::Malformed,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            FetchError::RequestError("refused".into()).kind(),
            FailureKind::Transport
        );
        assert_eq!(
            FetchError::HttpError {
                status: 502,
                message: String::new()
            }
            .kind(),
            FailureKind::Status
        );
        assert_eq!(
            FetchError::ParseError("eof".into()).kind().as_str(),
            "malformed"
        );
        assert_eq!(
            FetchError::JsonError("key must be a string".into()).kind(),
            FailureKind::Transport
        );
    }
}
