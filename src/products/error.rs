//! Error types for the product API.

use resource_framework::RequestError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The backend answered 404.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The backend refused the request with any other non-2xx status.
    #[error("Product request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The input failed a check before anything was sent.
    #[error("Product validation error: {0}")]
    Validation(String),

    /// The request did not complete, or the response could not be read.
    #[error("Product API communication error: {0}")]
    Communication(String),
}

impl From<RequestError> for ProductError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::Http { status: 404, message } => ProductError::NotFound(message),
            RequestError::Http { status, message } => ProductError::Rejected { status, message },
            RequestError::InvalidRequest(message) => ProductError::Validation(message),
            other => ProductError::Communication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_map_onto_domain_variants() {
        let not_found = RequestError::Http {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(
            ProductError::from(not_found),
            ProductError::NotFound("not found".into())
        );
        assert_eq!(
            ProductError::from(RequestError::from_status(500)),
            ProductError::Rejected {
                status: 500,
                message: "HTTP error! status: 500".into()
            }
        );
        assert!(matches!(
            ProductError::from(RequestError::InvalidRequest("id must not be empty".into())),
            ProductError::Validation(_)
        ));
        assert!(matches!(
            ProductError::from(RequestError::Network("connection refused".into())),
            ProductError::Communication(_)
        ));
    }
}
