//! Error types for the customer API.

use resource_framework::RequestError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The backend answered 404.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// The backend refused the request with any other non-2xx status.
    #[error("Customer request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The input failed a check before anything was sent.
    #[error("Customer validation error: {0}")]
    Validation(String),

    /// The request did not complete, or the response could not be read.
    #[error("Customer API communication error: {0}")]
    Communication(String),
}

impl From<RequestError> for CustomerError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::Http { status: 404, message } => CustomerError::NotFound(message),
            RequestError::Http { status, message } => CustomerError::Rejected { status, message },
            RequestError::InvalidRequest(message) => CustomerError::Validation(message),
            other => CustomerError::Communication(other.to_string()),
        }
    }
}
