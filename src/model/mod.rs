//! Data transfer objects for the MEWAYZ admin backend.
//!
//! Records are what the backend returns inside `{"data": ...}`. `*Create` and `*Update`
//! are the request bodies; unset update fields are left out of the JSON so the backend
//! keeps their current values.

pub mod customer;
pub mod order;
pub mod pricing;
pub mod product;

pub use customer::*;
pub use order::*;
pub use pricing::*;
pub use product::*;
