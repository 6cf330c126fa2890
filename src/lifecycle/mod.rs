//! System wiring: builds the shared [`ApiClient`](resource_framework::ApiClient), hands
//! each domain its client, and owns the in-memory backend task when there is one.

pub mod api_system;
pub mod sample_data;

pub use api_system::*;
pub use resource_framework::telemetry::setup_tracing;
pub use sample_data::seed_sample_data;
