//! # Mock Transports & Testing Guide
//!
//! Client code is tested without a server by swapping the [`Transport`].
//!
//! | Tool | Use it for |
//! |---|---|
//! | [`MockTransport`] | Scripted responses in order; assert on what was sent afterwards |
//! | [`create_mock_transport`] + [`expect_request`] | Inspect each request as it arrives and answer by hand |
//! | [`MemoryBackend`](crate::MemoryBackend) | Realistic CRUD state without HTTP |
//! | `mockito` (dev-dependency) | The real [`HttpTransport`](crate::HttpTransport) against a stub server |
//!
//! ## Scripted responses
//!
//! ```rust
//! use resource_framework::mock::MockTransport;
//! use resource_framework::{ApiClient, Method, NoopNotifier, RequestError};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect(Method::Delete, "orders").respond_json(200, json!({"data": {"id": "5"}}));
//!     mock.expect(Method::Delete, "orders").respond_json(404, json!({"error": "not found"}));
//!
//!     let api = ApiClient::new(mock.clone(), NoopNotifier);
//!     assert!(api.remove("orders", "5").await.is_ok());
//!     let err = api.remove("orders", "5").await.unwrap_err();
//!     assert_eq!(err.message(), "not found");
//!
//!     assert_eq!(mock.requests().len(), 2);
//!     mock.verify();
//! }
//! ```
//!
//! ## Answering by hand
//!
//! ```rust
//! use resource_framework::mock::{create_mock_transport, expect_request};
//! use resource_framework::{ApiClient, Method, NoopNotifier, QueryParams, RawResponse};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (transport, mut receiver) = create_mock_transport(8);
//!     let api = ApiClient::new(transport, NoopNotifier);
//!
//!     let call = tokio::spawn(async move { api.list("countries", &QueryParams::new()).await });
//!
//!     let (request, responder) = expect_request(&mut receiver, Method::Get).await.unwrap();
//!     assert_eq!(request.resource, "countries");
//!     responder.send(RawResponse::new(200, r#"{"data": []}"#)).unwrap();
//!
//!     assert!(call.await.unwrap().is_ok());
//! }
//! ```

use crate::envelope::{Exchange, Method, RawResponse, RequestEnvelope, Responder};
use crate::error::RequestError;
use crate::transport::{ChannelTransport, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted request/response pair.
struct Expectation {
    method: Method,
    resource: String,
    response: Result<RawResponse, RequestError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    requests: Vec<RequestEnvelope>,
}

/// A transport that answers from a queue of expectations.
///
/// Clones share the same queue and request log, so keep one clone for assertions
/// and hand the other to the client.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an expected request. Finish with one of the builder's `respond_*`/`fail`.
    pub fn expect(&self, method: Method, resource: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            resource: resource.into(),
            state: self.state.clone(),
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<RequestEnvelope> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &RequestEnvelope) -> Result<RawResponse, RequestError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        match state.expectations.pop_front() {
            Some(exp) if exp.method == request.method && exp.resource == request.resource => {
                exp.response
            }
            Some(exp) => panic!(
                "Expected {} {}, got {} {}",
                exp.method, exp.resource, request.method, request.resource
            ),
            None => panic!(
                "Unexpected request: {} {}",
                request.method, request.resource
            ),
        }
    }
}

/// Builder returned by [`MockTransport::expect`].
pub struct ExpectationBuilder {
    method: Method,
    resource: String,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Answers with `status` and `body` serialized as JSON.
    pub fn respond_json(self, status: u16, body: Value) {
        self.push(Ok(RawResponse::json(status, &body)));
    }

    /// Answers with `status` and a verbatim body.
    pub fn respond_text(self, status: u16, body: impl Into<String>) {
        self.push(Ok(RawResponse::new(status, body)));
    }

    /// Fails at the transport level, as if the server was unreachable.
    pub fn fail(self, error: RequestError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<RawResponse, RequestError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            resource: self.resource,
            response,
        });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a channel transport and the receiver its requests arrive on.
///
/// Nothing answers unless the test does, which makes this the tool for asserting on
/// each request while it is in flight.
pub fn create_mock_transport(buffer_size: usize) -> (ChannelTransport, mpsc::Receiver<Exchange>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelTransport::new(sender), receiver)
}

/// Waits for the next request and returns it if its method is `method`.
pub async fn expect_request(
    receiver: &mut mpsc::Receiver<Exchange>,
    method: Method,
) -> Option<(RequestEnvelope, Responder)> {
    match receiver.recv().await {
        Some(Exchange {
            request,
            respond_to,
        }) if request.method == method => Some((request, respond_to)),
        _ => None,
    }
}
