//! Subscription plans.

pub mod error;
pub mod resource;

pub use error::*;

use crate::clients::PricingClient;
use resource_framework::ApiClient;

pub fn new(api: &ApiClient) -> PricingClient {
    PricingClient::new(api.resource())
}
