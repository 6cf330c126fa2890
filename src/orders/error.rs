//! Error types for the order API.

use resource_framework::RequestError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The backend answered 404.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The backend refused the request with any other non-2xx status.
    #[error("Order request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The input failed a check before anything was sent.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The request did not complete, or the response could not be read.
    #[error("Order API communication error: {0}")]
    Communication(String),
}

impl From<RequestError> for OrderError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::Http { status: 404, message } => OrderError::NotFound(message),
            RequestError::Http { status, message } => OrderError::Rejected { status, message },
            RequestError::InvalidRequest(message) => OrderError::Validation(message),
            other => OrderError::Communication(other.to_string()),
        }
    }
}
