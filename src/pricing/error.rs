//! Error types for the pricing plan API.

use resource_framework::RequestError;
use thiserror::Error;

/// Errors that can occur during pricing plan operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingPlanError {
    /// The backend answered 404.
    #[error("Pricing plan not found: {0}")]
    NotFound(String),

    /// The backend refused the request with any other non-2xx status.
    #[error("Pricing plan request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The input failed a check before anything was sent.
    #[error("Pricing plan validation error: {0}")]
    Validation(String),

    /// The request did not complete, or the response could not be read.
    #[error("Pricing plan API communication error: {0}")]
    Communication(String),
}

impl From<RequestError> for PricingPlanError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::Http { status: 404, message } => PricingPlanError::NotFound(message),
            RequestError::Http { status, message } => PricingPlanError::Rejected { status, message },
            RequestError::InvalidRequest(message) => PricingPlanError::Validation(message),
            other => PricingPlanError::Communication(other.to_string()),
        }
    }
}
