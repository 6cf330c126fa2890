//! # Request & Response Envelopes
//!
//! This module defines the wire-independent shapes exchanged between the
//! [`ApiClient`](crate::ApiClient) and a [`Transport`](crate::Transport).
//!
//! # The CRUD Convention
//! Every backend collection is addressed the same way, so a request is fully described
//! by four things:
//!
//! | Operation | Method | Path | Body |
//! |---|---|---|---|
//! | list | GET | `{base}/{resource}?{query}` | none |
//! | create | POST | `{base}/{resource}` | JSON |
//! | update | PUT | `{base}/{resource}?id={id}` | JSON |
//! | remove | DELETE | `{base}/{resource}?id={id}` | none |
//!
//! Transports receive a [`RequestEnvelope`] and return a [`RawResponse`]; interpreting
//! the status code is left to the client so every transport behaves identically.

use crate::error::RequestError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use tokio::sync::oneshot;
use url::Url;

/// HTTP verbs used by the CRUD convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query-string parameters for a list request.
///
/// Values are stringified on insert; no coercion or validation is performed.
/// Keys are kept sorted so the serialized query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// One request against a named resource collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    pub method: Method,
    pub resource: String,
    pub id: Option<String>,
    pub body: Option<Value>,
    pub query: QueryParams,
}

impl RequestEnvelope {
    pub fn list(resource: impl Into<String>, query: QueryParams) -> Self {
        Self {
            method: Method::Get,
            resource: resource.into(),
            id: None,
            body: None,
            query,
        }
    }

    pub fn create(resource: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            resource: resource.into(),
            id: None,
            body: Some(body),
            query: QueryParams::new(),
        }
    }

    pub fn update(resource: impl Into<String>, id: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            resource: resource.into(),
            id: Some(id.into()),
            body: Some(body),
            query: QueryParams::new(),
        }
    }

    pub fn remove(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            resource: resource.into(),
            id: Some(id.into()),
            body: None,
            query: QueryParams::new(),
        }
    }

    /// Rejects envelopes that could not address a collection or record.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.resource.trim().is_empty() {
            return Err(RequestError::InvalidRequest(
                "resource name must not be empty".to_string(),
            ));
        }
        if matches!(self.id.as_deref(), Some(id) if id.is_empty()) {
            return Err(RequestError::InvalidRequest(format!(
                "{} {} requires a non-empty id",
                self.method, self.resource
            )));
        }
        Ok(())
    }

    /// Builds the absolute URL for this request under `base`.
    ///
    /// The id (if any) comes first in the query string, followed by the query
    /// parameters. An envelope with neither produces no `?` at all.
    pub fn url(&self, base: &Url) -> Result<Url, RequestError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| RequestError::InvalidRequest(format!("cannot use {base} as a base URL")))?
            .pop_if_empty()
            .push(&self.resource);

        if self.id.is_some() || !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if let Some(id) = &self.id {
                pairs.append_pair("id", id);
            }
            for (key, value) in self.query.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// The unparsed outcome of a request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response whose body is the serialized `value`.
    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Type alias for the one-shot channel a backend answers on.
pub type Responder = oneshot::Sender<RawResponse>;

/// A request paired with the channel its response goes back on.
///
/// This is the message type carried by [`ChannelTransport`](crate::ChannelTransport).
#[derive(Debug)]
pub struct Exchange {
    pub request: RequestEnvelope,
    pub respond_to: Responder,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("http://localhost:3000/api").unwrap()
    }

    #[test]
    fn list_url_carries_every_query_pair() {
        let query = QueryParams::new().with("limit", 10).with("status", "active");
        let url = RequestEnvelope::list("products", query).url(&base()).unwrap();

        assert_eq!(url.path(), "/api/products");
        let pairs: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["limit"], "10");
        assert_eq!(pairs["status"], "active");
    }

    #[test]
    fn list_without_query_has_no_question_mark() {
        let url = RequestEnvelope::list("customers", QueryParams::new())
            .url(&base())
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/customers");
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let base = Url::parse("http://localhost:3000/api/").unwrap();
        let url = RequestEnvelope::remove("orders", "42").url(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/orders?id=42");
    }

    #[test]
    fn update_url_encodes_id() {
        let url = RequestEnvelope::update("products", "a b&c", json!({}))
            .url(&base())
            .unwrap();
        assert_eq!(url.path(), "/api/products");
        let id = url.query_pairs().find(|(k, _)| k == "id").map(|(_, v)| v.into_owned());
        assert_eq!(id.as_deref(), Some("a b&c"));
    }

    #[test]
    fn validate_rejects_empty_names_and_ids() {
        assert!(RequestEnvelope::list("", QueryParams::new()).validate().is_err());
        assert!(RequestEnvelope::remove("products", "").validate().is_err());
        assert!(RequestEnvelope::remove("products", "1").validate().is_ok());
    }

    #[test]
    fn query_values_are_stringified() {
        let query: QueryParams = [("limit", 5.to_string()), ("page", "2".to_string())]
            .into_iter()
            .collect();
        assert_eq!(query.get("limit"), Some("5"));
        assert_eq!(query.len(), 2);
    }
}
