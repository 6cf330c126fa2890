//! # Request Errors
//!
//! Every operation in the framework fails with a single error type, [`RequestError`].
//! Keeping one enum for the whole transport layer means callers match on the same
//! variants whether the request went over HTTP, a channel, or a mock.

/// Errors that can occur while executing a resource request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// The transport could not complete the request (DNS, connect, closed channel).
    #[error("{0}")]
    Network(String),

    /// The server answered outside the 2xx range.
    ///
    /// `message` is the server's `error` field when present, otherwise
    /// `HTTP error! status: {status}`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A success body was not valid JSON, or did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The payload could not be serialized to JSON.
    #[error("Invalid request body: {0}")]
    Encode(String),

    /// The request was rejected before it was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RequestError {
    /// Builds the error for a non-2xx status with no server-provided message.
    pub fn from_status(status: u16) -> Self {
        Self::Http {
            status,
            message: format!("HTTP error! status: {status}"),
        }
    }

    /// The HTTP status code, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The human-readable message shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
