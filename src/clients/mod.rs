//! Typed clients, one per backend collection.
//!
//! Each wraps a [`ResourceClient`](resource_framework::ResourceClient), checks its input
//! before sending, and returns its domain's error type. `list` and `remove` come from
//! [`DomainClient`](resource_framework::DomainClient).

pub mod customer_client;
pub mod order_client;
pub mod pricing_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use pricing_client::*;
pub use product_client::*;
