//! Product catalog: resource binding, errors and client factory.

pub mod error;
pub mod resource;

pub use error::*;

use crate::clients::ProductClient;
use resource_framework::ApiClient;

/// Creates a product client that shares `api`'s transport and notifier.
pub fn new(api: &ApiClient) -> ProductClient {
    ProductClient::new(api.resource())
}
