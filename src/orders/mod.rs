//! Orders placed by customers.
//!
//! The backend stores the order total as sent, so [`OrderCreate::new`](crate::model::OrderCreate::new)
//! computes it from the items and the client checks it again before sending.

pub mod error;
pub mod resource;

pub use error::*;

use crate::clients::OrderClient;
use resource_framework::ApiClient;

/// Creates an order client that shares `api`'s transport and notifier.
pub fn new(api: &ApiClient) -> OrderClient {
    OrderClient::new(api.resource())
}
