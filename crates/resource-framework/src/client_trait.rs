//! # DomainClient Trait
//!
//! Domain clients (`ProductClient`, `CustomerClient`, ...) wrap a
//! [`ResourceClient`] and translate [`RequestError`] into their own error enum.
//! Implementing [`DomainClient`] gives them `list` and `remove` for free, so each
//! one only writes the operations that are specific to its domain.
//!
//! ```rust
//! use resource_framework::{DomainClient, RequestError, Resource, ResourceClient};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Deserialize)] struct Follower { id: String }
//! #[derive(Debug, Serialize)] struct FollowerCreate { handle: String }
//!
//! impl Resource for Follower {
//!     const NAME: &'static str = "followers";
//!     type Id = String;
//!     type Record = Follower;
//!     type Create = FollowerCreate;
//!     type Update = FollowerCreate;
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("follower error: {0}")]
//! struct FollowerError(String);
//!
//! struct FollowerClient { inner: ResourceClient<Follower> }
//!
//! impl DomainClient<Follower> for FollowerClient {
//!     type Error = FollowerError;
//!
//!     fn inner(&self) -> &ResourceClient<Follower> {
//!         &self.inner
//!     }
//!
//!     fn map_error(e: RequestError) -> Self::Error {
//!         FollowerError(e.message())
//!     }
//! }
//!
//! // list() and remove() are provided.
//! async fn prune(client: &FollowerClient, id: String) -> Result<(), FollowerError> {
//!     client.remove(&id).await
//! }
//! ```
use crate::{QueryParams, RequestError, Resource, ResourceClient};
use async_trait::async_trait;

/// Shared surface of the typed domain clients.
#[async_trait]
pub trait DomainClient<T: Resource>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner typed client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map request errors to the domain error type.
    fn map_error(e: RequestError) -> Self::Error;

    /// List records matching `query`.
    #[tracing::instrument(skip(self), fields(resource = T::NAME))]
    async fn list(&self, query: &QueryParams) -> Result<Vec<T::Record>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Remove a record by id.
    #[tracing::instrument(skip(self), fields(resource = T::NAME))]
    async fn remove(&self, id: &T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(id).await.map_err(Self::map_error)
    }
}
