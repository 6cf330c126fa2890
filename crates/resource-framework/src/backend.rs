//! # In-Memory Backend
//!
//! [`MemoryBackend`] serves the `/api/<resource>` convention from inside the process.
//! It is the server half of a [`ChannelTransport`]: it owns every record and the
//! receiving end of the channel, and handles requests one at a time in its own task.
//! No locks are needed around the store because nothing else can reach it.
//!
//! # Behavior
//!
//! | Request | Response |
//! |---|---|
//! | `GET` | 200 `{"data": [...]}`; `limit`/`offset` page the list, `search` matches any text field, other parameters filter by field |
//! | `POST` | 201 `{"data": record}`; assigns the next free sequential `id` unless the body has one; 409 if that id is taken |
//! | `PUT ?id=` | 200 `{"data": record}` after a shallow merge; 404 if unknown |
//! | `DELETE ?id=` | 200 `{"data": removed}`; 404 if unknown |
//!
//! Errors use the `{"error": "..."}` body the client expects.
//!
//! ```rust
//! use resource_framework::{ApiClient, MemoryBackend, NoopNotifier, QueryParams};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (backend, transport) = MemoryBackend::new(16);
//!     let handle = tokio::spawn(backend.run());
//!
//!     let api = ApiClient::new(transport, NoopNotifier);
//!     api.create("products", &json!({"name": "Widget"})).await.unwrap();
//!     let listed = api.list("products", &QueryParams::new()).await.unwrap();
//!     assert_eq!(listed["data"][0]["id"], "1");
//!
//!     drop(api);
//!     handle.await.unwrap();
//! }
//! ```

use crate::envelope::{Exchange, Method, RawResponse, RequestEnvelope};
use crate::transport::ChannelTransport;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Query parameters with a meaning of their own; everything else is a field filter.
const RESERVED_PARAMS: [&str; 3] = ["limit", "offset", "search"];

/// Records of one collection, keyed by id.
type Collection = BTreeMap<String, Value>;

/// An in-process REST backend.
pub struct MemoryBackend {
    receiver: mpsc::Receiver<Exchange>,
    store: HashMap<String, Collection>,
    next_id: u32,
}

impl MemoryBackend {
    /// Creates a backend and the transport that reaches it.
    ///
    /// `buffer_size` is the channel capacity; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ChannelTransport) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let backend = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (backend, ChannelTransport::new(sender))
    }

    /// Pre-loads records into `resource`.
    ///
    /// Records without a string or numeric `id` get a generated one. A seeded record
    /// replaces an earlier one with the same id.
    pub fn seed(mut self, resource: &str, records: impl IntoIterator<Item = Value>) -> Self {
        for record in records {
            if let Value::Object(fields) = record {
                self.insert(resource, fields);
            }
        }
        self
    }

    /// Number of records currently in `resource`.
    pub fn len(&self, resource: &str) -> usize {
        self.store.get(resource).map_or(0, Collection::len)
    }

    /// Serves requests until every transport has been dropped.
    pub async fn run(mut self) {
        info!(collections = self.store.len(), "Backend started");

        while let Some(Exchange {
            request,
            respond_to,
        }) = self.receiver.recv().await
        {
            let response = self.handle(&request);
            if !response.is_success() {
                warn!(
                    method = %request.method,
                    resource = %request.resource,
                    status = response.status,
                    "Request rejected"
                );
            }
            let _ = respond_to.send(response);
        }

        let records: usize = self.store.values().map(Collection::len).sum();
        info!(records, "Backend shutdown");
    }

    fn handle(&mut self, request: &RequestEnvelope) -> RawResponse {
        match request.method {
            Method::Get => self.list(request),
            Method::Post => self.create(request),
            Method::Put => self.update(request),
            Method::Delete => self.remove(request),
        }
    }

    fn list(&self, request: &RequestEnvelope) -> RawResponse {
        let query = &request.query;
        let offset = match parse_count(query.get("offset")) {
            Ok(n) => n.unwrap_or(0),
            Err(e) => return error(400, &e),
        };
        let limit = match parse_count(query.get("limit")) {
            Ok(n) => n.unwrap_or(usize::MAX),
            Err(e) => return error(400, &e),
        };
        let search = query.get("search").map(str::to_lowercase);
        let filters: Vec<(&str, &str)> = query
            .iter()
            .filter(|(key, _)| !RESERVED_PARAMS.contains(key))
            .collect();

        let records: Vec<Value> = self
            .store
            .get(&request.resource)
            .into_iter()
            .flat_map(Collection::values)
            .filter(|record| filters.iter().all(|(k, v)| field_matches(record, k, v)))
            .filter(|record| search.as_deref().map_or(true, |term| text_contains(record, term)))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        debug!(resource = %request.resource, count = records.len(), "List");
        RawResponse::json(200, &json!({ "data": records }))
    }

    fn create(&mut self, request: &RequestEnvelope) -> RawResponse {
        let Some(Value::Object(fields)) = request.body.clone() else {
            return error(400, "body must be a JSON object");
        };
        if let Some(id) = explicit_id(&fields) {
            if self.contains(&request.resource, &id) {
                return error(409, "id already exists");
            }
        }
        let record = self.insert(&request.resource, fields);
        info!(
            resource = %request.resource,
            id = %record["id"],
            size = self.len(&request.resource),
            "Created"
        );
        RawResponse::json(201, &json!({ "data": record }))
    }

    fn update(&mut self, request: &RequestEnvelope) -> RawResponse {
        let Some(id) = request.id.as_deref() else {
            return error(400, "id is required");
        };
        let Some(Value::Object(changes)) = request.body.clone() else {
            return error(400, "body must be a JSON object");
        };
        let Some(Value::Object(record)) = self
            .store
            .get_mut(&request.resource)
            .and_then(|c| c.get_mut(id))
        else {
            return error(404, "not found");
        };

        for (key, value) in changes {
            if key != "id" {
                record.insert(key, value);
            }
        }
        info!(resource = %request.resource, id, "Updated");
        RawResponse::json(200, &json!({ "data": record }))
    }

    fn remove(&mut self, request: &RequestEnvelope) -> RawResponse {
        let Some(id) = request.id.as_deref() else {
            return error(400, "id is required");
        };
        match self
            .store
            .get_mut(&request.resource)
            .and_then(|c| c.remove(id))
        {
            Some(removed) => {
                info!(
                    resource = %request.resource,
                    id,
                    size = self.len(&request.resource),
                    "Deleted"
                );
                RawResponse::json(200, &json!({ "data": removed }))
            }
            None => error(404, "not found"),
        }
    }

    fn insert(&mut self, resource: &str, mut fields: Map<String, Value>) -> Value {
        let id = match explicit_id(&fields) {
            Some(id) => id,
            None => self.next_free_id(resource),
        };
        fields.insert("id".to_string(), Value::String(id.clone()));
        let record = Value::Object(fields);
        self.store
            .entry(resource.to_string())
            .or_default()
            .insert(id, record.clone());
        record
    }

    fn contains(&self, resource: &str, id: &str) -> bool {
        self.store.get(resource).is_some_and(|c| c.contains_key(id))
    }

    /// Skips counter values already taken by seeded or explicitly identified records.
    fn next_free_id(&mut self, resource: &str) -> String {
        loop {
            let id = self.next_id.to_string();
            self.next_id += 1;
            if !self.contains(resource, &id) {
                return id;
            }
        }
    }
}

fn error(status: u16, message: &str) -> RawResponse {
    RawResponse::json(status, &json!({ "error": message }))
}

/// A non-empty string or numeric `id` supplied by the caller.
fn explicit_id(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_count(value: Option<&str>) -> Result<Option<usize>, String> {
    value
        .map(|v| v.parse().map_err(|_| format!("invalid number: {v}")))
        .transpose()
}

/// Compares a record field against a query value using the field's string form.
fn field_matches(record: &Value, key: &str, expected: &str) -> bool {
    match record.get(key) {
        Some(Value::String(s)) => s == expected,
        Some(other) => other.to_string() == expected,
        None => false,
    }
}

/// Case-insensitive substring match over the record's string fields. `term` is lowercase.
fn text_contains(record: &Value, term: &str) -> bool {
    record.as_object().is_some_and(|fields| {
        fields
            .values()
            .filter_map(Value::as_str)
            .any(|text| text.to_lowercase().contains(term))
    })
}
