//! # Resource Framework
//!
//! A uniform CRUD client for backends that expose every collection as
//! `/api/<resource>` with JSON bodies.
//!
//! ## One Convention, Every Resource
//!
//! Products, customers, payouts, FAQs, pricing plans: the backend addresses all of them
//! the same way, so one client serves all of them.
//!
//! | Operation | Method | Path | Body |
//! |---|---|---|---|
//! | list | GET | `{base}/{resource}?{query}` | none |
//! | create | POST | `{base}/{resource}` | JSON |
//! | update | PUT | `{base}/{resource}?id={id}` | JSON |
//! | remove | DELETE | `{base}/{resource}?id={id}` | none |
//!
//! A response in the 2xx range resolves to its parsed JSON body. Anything else fails
//! with a [`RequestError`] carrying the server's `error` message, or
//! `HTTP error! status: {code}` when there is none.
//!
//! ## Architecture Overview
//!
//! 1. **Interface layer** ([`ApiClient`], [`ResourceClient`], [`DomainClient`]):
//!    name-based and typed entry points.
//! 2. **Transport layer** ([`Transport`]): carries a [`RequestEnvelope`] and returns a
//!    [`RawResponse`]. [`HttpTransport`] for real servers, [`ChannelTransport`] for the
//!    in-process [`MemoryBackend`], [`mock::MockTransport`] for tests.
//! 3. **Notification layer** ([`Notifier`]): every failure is shown to the user once,
//!    then returned to the caller.
//!
//! ## Typed Resources
//!
//! ```rust
//! use resource_framework::mock::MockTransport;
//! use resource_framework::{ApiClient, Method, NoopNotifier, QueryParams, Resource};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Deserialize)]
//! struct Payout { id: String, amount: f64 }
//! #[derive(Debug, Serialize)]
//! struct PayoutCreate { amount: f64 }
//!
//! impl Resource for Payout {
//!     const NAME: &'static str = "payouts";
//!     type Id = String;
//!     type Record = Payout;
//!     type Create = PayoutCreate;
//!     type Update = PayoutCreate;
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect(Method::Get, "payouts")
//!         .respond_json(200, json!({"data": [{"id": "p1", "amount": 120.0}]}));
//!
//!     let api = ApiClient::new(mock, NoopNotifier);
//!     let payouts = api.resource::<Payout>().list(&QueryParams::new()).await.unwrap();
//!     assert_eq!(payouts[0].amount, 120.0);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! Every operation is a single await on one request. Calls are independent: no
//! ordering, retries, caching or deduplication. The [`MemoryBackend`] handles its
//! requests sequentially inside one task, so its store needs no locks.
//!
//! ## Testing
//!
//! See the [`mock`] module.

pub mod backend;
pub mod client;
pub mod client_trait;
pub mod config;
pub mod envelope;
pub mod error;
pub mod mock;
pub mod notify;
pub mod resource;
pub mod telemetry;
pub mod transport;

// Re-export core types for convenience
pub use backend::MemoryBackend;
pub use client::{interpret, ApiClient, ResourceClient};
pub use client_trait::DomainClient;
pub use config::ApiConfig;
pub use envelope::{Exchange, Method, QueryParams, RawResponse, RequestEnvelope, Responder};
pub use error::RequestError;
pub use notify::{Notice, NoticeLevel, NoopNotifier, Notifier, RecordingNotifier, TracingNotifier};
pub use resource::{DataEnvelope, Resource};
pub use transport::{ChannelTransport, HttpTransport, Transport};
