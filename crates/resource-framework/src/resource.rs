//! # Resource Trait
//!
//! The name-based [`ApiClient`](crate::ApiClient) accepts any JSON. Implementing
//! [`Resource`] for a record type pins a collection name to concrete payload types,
//! so a `ProductCreate` can never be posted to `customers`.
//!
//! ```rust
//! use resource_framework::Resource;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Deserialize)]
//! struct Faq { id: String, question: String }
//!
//! #[derive(Debug, Serialize)]
//! struct FaqCreate { question: String }
//!
//! #[derive(Debug, Serialize)]
//! struct FaqUpdate { question: Option<String> }
//!
//! impl Resource for Faq {
//!     const NAME: &'static str = "faqs";
//!     type Id = String;
//!     type Record = Faq;
//!     type Create = FaqCreate;
//!     type Update = FaqUpdate;
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// A backend collection with typed payloads.
pub trait Resource: Send + Sync + 'static {
    /// The collection name, addressed as `{base}/{NAME}`.
    const NAME: &'static str;

    /// Record identifier; sent as the `id` query parameter.
    type Id: Display + Debug + Send + Sync;

    /// What the server returns for one record.
    type Record: DeserializeOwned + Debug + Send;

    /// Body of a create request.
    type Create: Serialize + Debug + Send + Sync;

    /// Body of an update request. Usually all-optional fields.
    type Update: Serialize + Debug + Send + Sync;
}

/// The `{"data": ...}` wrapper the backend puts around payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
