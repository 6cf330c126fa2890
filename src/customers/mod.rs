//! Customer records.

pub mod error;
pub mod resource;

pub use error::*;

use crate::clients::CustomerClient;
use resource_framework::ApiClient;

pub fn new(api: &ApiClient) -> CustomerClient {
    CustomerClient::new(api.resource())
}
