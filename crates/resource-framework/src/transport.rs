//! # Transports
//!
//! A [`Transport`] carries one [`RequestEnvelope`] to a backend and hands back the
//! [`RawResponse`]. Only failures to *reach* the backend are errors at this layer; a
//! 404 is still a response.
//!
//! - [`HttpTransport`]: JSON over HTTP with `reqwest`.
//! - [`ChannelTransport`]: in-process, over a Tokio mpsc channel (see
//!   [`MemoryBackend`](crate::MemoryBackend)).
//! - [`MockTransport`](crate::mock::MockTransport): scripted responses for tests.

use crate::config::ApiConfig;
use crate::envelope::{Exchange, Method, RawResponse, RequestEnvelope};
use crate::error::RequestError;
use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;
use url::Url;

/// Executes a single request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &RequestEnvelope) -> Result<RawResponse, RequestError>;
}

/// JSON-over-HTTP transport.
///
/// The base URL is resolved once in [`HttpTransport::new`]. No timeout or retry is
/// configured; reqwest's defaults apply.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, RequestError> {
        let base_url = config.resolve_base_url()?;
        let http = Client::builder()
            .user_agent(concat!("mewayz-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RequestError::Network(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &RequestEnvelope) -> Result<RawResponse, RequestError> {
        let url = request.url(&self.base_url)?;
        debug!(method = %request.method, %url, "Sending request");

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.http.request(method, url);
        if let Some(body) = &request.body {
            // .json() sets Content-Type: application/json
            builder = builder.json(body);
        }

        let res = builder
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        debug!(status, bytes = body.len(), "Received response");
        Ok(RawResponse { status, body })
    }
}

/// In-process transport that forwards each request as an [`Exchange`].
///
/// Cheap to clone: it holds only the sender. The backend stops once every clone is
/// dropped.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<Exchange>,
}

impl ChannelTransport {
    pub fn new(sender: mpsc::Sender<Exchange>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn execute(&self, request: &RequestEnvelope) -> Result<RawResponse, RequestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Exchange {
                request: request.clone(),
                respond_to,
            })
            .await
            .map_err(|_| RequestError::Network("Backend closed".to_string()))?;
        response
            .await
            .map_err(|_| RequestError::Network("Backend dropped response channel".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::QueryParams;

    #[tokio::test]
    async fn channel_transport_reports_closed_backend() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        let transport = ChannelTransport::new(sender);

        let err = transport
            .execute(&RequestEnvelope::list("products", QueryParams::new()))
            .await
            .unwrap_err();
        assert_eq!(err, RequestError::Network("Backend closed".into()));
    }

    #[tokio::test]
    async fn channel_transport_reports_dropped_responder() {
        let (sender, mut receiver) = mpsc::channel::<Exchange>(1);
        let transport = ChannelTransport::new(sender);

        let backend = tokio::spawn(async move {
            // Receive and drop without answering.
            let _ = receiver.recv().await;
        });

        let err = transport
            .execute(&RequestEnvelope::remove("products", "1"))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Network(msg) if msg.contains("dropped")));
        backend.await.unwrap();
    }

    #[test]
    fn http_transport_resolves_base_once() {
        let transport = HttpTransport::new(&ApiConfig::default()).unwrap();
        assert_eq!(transport.base_url().as_str(), "http://localhost:3000/api");
    }
}
