//! # Clients
//!
//! [`ApiClient`] is the uniform CRUD entry point: one instance serves every resource
//! collection by name. [`ResourceClient<T>`] layers a [`Resource`]'s payload types on
//! top of it.
//!
//! Both report failures through the same path: the error is sent to the injected
//! [`Notifier`] exactly once and then returned to the caller.

use crate::config::ApiConfig;
use crate::envelope::{Method, QueryParams, RawResponse, RequestEnvelope};
use crate::error::RequestError;
use crate::notify::{Notice, Notifier, TracingNotifier};
use crate::resource::{DataEnvelope, Resource};
use crate::transport::{HttpTransport, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Name-based CRUD client for the `/api/<resource>` convention.
///
/// Cheap to clone; the transport and notifier are shared.
///
/// ```rust
/// use resource_framework::mock::MockTransport;
/// use resource_framework::{ApiClient, Method, QueryParams, RecordingNotifier};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() {
///     let mock = MockTransport::new();
///     mock.expect(Method::Get, "products")
///         .respond_json(200, json!({"data": [{"id": "1", "name": "Widget"}]}));
///
///     let notifier = RecordingNotifier::new();
///     let api = ApiClient::new(mock.clone(), notifier.clone());
///
///     let query = QueryParams::new().with("limit", 10);
///     let body = api.list("products", &query).await.unwrap();
///     assert_eq!(body["data"][0]["name"], "Widget");
///     assert!(notifier.is_empty());
///     mock.verify();
/// }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: impl Transport + 'static, notifier: impl Notifier + 'static) -> Self {
        Self::from_parts(Arc::new(transport), Arc::new(notifier))
    }

    pub fn from_parts(transport: Arc<dyn Transport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            transport,
            notifier,
        }
    }

    /// An HTTP client for `config` that logs notices.
    pub fn http(config: &ApiConfig) -> Result<Self, RequestError> {
        Ok(Self::new(HttpTransport::new(config)?, TracingNotifier))
    }

    /// [`http`](Self::http) with the configuration read from the environment.
    pub fn from_env() -> Result<Self, RequestError> {
        Self::http(&ApiConfig::from_env())
    }

    /// Typed view of one collection.
    pub fn resource<T: Resource>(&self) -> ResourceClient<T> {
        ResourceClient::new(self.clone())
    }

    /// `GET {base}/{resource}?{query}`
    #[instrument(skip(self))]
    pub async fn list(&self, resource: &str, query: &QueryParams) -> Result<Value, RequestError> {
        self.send(RequestEnvelope::list(resource, query.clone()))
            .await
    }

    /// `POST {base}/{resource}` with a JSON body.
    #[instrument(skip(self, payload))]
    pub async fn create<P>(&self, resource: &str, payload: &P) -> Result<Value, RequestError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let body = self.encode(Method::Post, resource, payload)?;
        self.send(RequestEnvelope::create(resource, body)).await
    }

    /// `PUT {base}/{resource}?id={id}` with a JSON body.
    #[instrument(skip(self, payload))]
    pub async fn update<P>(&self, resource: &str, id: &str, payload: &P) -> Result<Value, RequestError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let body = self.encode(Method::Put, resource, payload)?;
        self.send(RequestEnvelope::update(resource, id, body)).await
    }

    /// `DELETE {base}/{resource}?id={id}`
    #[instrument(skip(self))]
    pub async fn remove(&self, resource: &str, id: &str) -> Result<Value, RequestError> {
        self.send(RequestEnvelope::remove(resource, id)).await
    }

    /// Executes any envelope, reporting a failure before returning it.
    pub async fn send(&self, request: RequestEnvelope) -> Result<Value, RequestError> {
        debug!(method = %request.method, resource = %request.resource, id = ?request.id, "Request");
        match self.dispatch(&request).await {
            Ok(value) => Ok(value),
            Err(e) => Err(self.report(request.method, &request.resource, e)),
        }
    }

    async fn dispatch(&self, request: &RequestEnvelope) -> Result<Value, RequestError> {
        request.validate()?;
        let raw = self.transport.execute(request).await?;
        interpret(raw)
    }

    fn encode<P>(&self, method: Method, resource: &str, payload: &P) -> Result<Value, RequestError>
    where
        P: Serialize + ?Sized,
    {
        serde_json::to_value(payload)
            .map_err(|e| self.report(method, resource, RequestError::Encode(e.to_string())))
    }

    /// Logs `error`, shows it to the user, and hands it back for propagation.
    pub(crate) fn report(&self, method: Method, resource: &str, error: RequestError) -> RequestError {
        warn!(%method, resource, status = ?error.status(), error = %error, "Request failed");
        self.notifier
            .notify(Notice::error(method, resource, error.message()));
        error
    }
}

/// Turns a raw response into the parsed body or the error it represents.
///
/// - 2xx: the body parsed as JSON; an empty body parses as `null`.
/// - otherwise: the `error` string from the JSON body if there is a non-empty one,
///   else `HTTP error! status: {code}`. An unparseable error body counts as `{}`.
pub fn interpret(raw: RawResponse) -> Result<Value, RequestError> {
    if raw.is_success() {
        if raw.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(&raw.body).map_err(RequestError::from);
    }

    let body: Value =
        serde_json::from_str(&raw.body).unwrap_or_else(|_| Value::Object(Default::default()));
    match body.get("error").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => Err(RequestError::Http {
            status: raw.status,
            message: message.to_string(),
        }),
        _ => Err(RequestError::from_status(raw.status)),
    }
}

/// Typed client for one [`Resource`].
///
/// Success bodies are expected as `{"data": ...}`; anything else is a
/// [`RequestError::Decode`], reported like any other failure.
pub struct ResourceClient<T: Resource> {
    api: ApiClient,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self::new(self.api.clone())
    }
}

impl<T: Resource> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &T::NAME)
            .finish()
    }
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[instrument(skip(self), fields(resource = T::NAME))]
    pub async fn list(&self, query: &QueryParams) -> Result<Vec<T::Record>, RequestError> {
        let body = self.api.list(T::NAME, query).await?;
        self.decode(Method::Get, body)
    }

    #[instrument(skip(self), fields(resource = T::NAME))]
    pub async fn create(&self, params: &T::Create) -> Result<T::Record, RequestError> {
        let body = self.api.create(T::NAME, params).await?;
        self.decode(Method::Post, body)
    }

    #[instrument(skip(self), fields(resource = T::NAME))]
    pub async fn update(&self, id: &T::Id, update: &T::Update) -> Result<T::Record, RequestError> {
        let body = self.api.update(T::NAME, &id.to_string(), update).await?;
        self.decode(Method::Put, body)
    }

    /// Removes a record. The response body is not inspected.
    #[instrument(skip(self), fields(resource = T::NAME))]
    pub async fn remove(&self, id: &T::Id) -> Result<(), RequestError> {
        self.api.remove(T::NAME, &id.to_string()).await.map(|_| ())
    }

    fn decode<D: DeserializeOwned>(&self, method: Method, body: Value) -> Result<D, RequestError> {
        serde_json::from_value::<DataEnvelope<D>>(body)
            .map(|envelope| envelope.data)
            .map_err(|e| self.api.report(method, T::NAME, RequestError::Decode(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use crate::notify::RecordingNotifier;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Faq {
        id: String,
        question: String,
    }

    #[derive(Debug, Serialize)]
    struct FaqCreate {
        question: String,
    }

    impl Resource for Faq {
        const NAME: &'static str = "faqs";
        type Id = String;
        type Record = Faq;
        type Create = FaqCreate;
        type Update = FaqCreate;
    }

    fn client() -> (ApiClient, MockTransport, RecordingNotifier) {
        let mock = MockTransport::new();
        let notifier = RecordingNotifier::new();
        (ApiClient::new(mock.clone(), notifier.clone()), mock, notifier)
    }

    #[test]
    fn interpret_uses_server_error_message() {
        let err = interpret(RawResponse::new(404, r#"{"error": "not found"}"#)).unwrap_err();
        assert_eq!(err.message(), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn interpret_synthesizes_message_for_non_json_body() {
        let err = interpret(RawResponse::new(500, "<html>Internal Server Error</html>")).unwrap_err();
        assert_eq!(err.message(), "HTTP error! status: 500");
    }

    #[test]
    fn interpret_ignores_empty_or_non_string_error_fields() {
        let err = interpret(RawResponse::new(400, r#"{"error": ""}"#)).unwrap_err();
        assert_eq!(err.message(), "HTTP error! status: 400");
        let err = interpret(RawResponse::new(422, r#"{"error": {"field": "name"}}"#)).unwrap_err();
        assert_eq!(err.message(), "HTTP error! status: 422");
    }

    #[test]
    fn interpret_returns_success_body_verbatim() {
        let body = json!({"data": [{"id": "1"}], "total": 1});
        assert_eq!(interpret(RawResponse::json(200, &body)).unwrap(), body);
        assert_eq!(interpret(RawResponse::new(204, "")).unwrap(), Value::Null);
    }

    #[test]
    fn interpret_rejects_malformed_success_body() {
        let err = interpret(RawResponse::new(200, "{not json")).unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[tokio::test]
    async fn failure_is_notified_once_and_returned() {
        let (api, mock, notifier) = client();
        mock.expect(Method::Delete, "products")
            .respond_json(404, json!({"error": "not found"}));

        let err = api.remove("products", "7").await.unwrap_err();

        assert_eq!(err.message(), "not found");
        assert_eq!(notifier.messages(), vec!["not found".to_string()]);
        assert_eq!(notifier.notices()[0].method, Method::Delete);
        assert_eq!(notifier.notices()[0].resource, "products");
        mock.verify();
    }

    #[tokio::test]
    async fn empty_resource_name_never_reaches_transport() {
        let (api, mock, notifier) = client();

        let err = api.list("", &QueryParams::new()).await.unwrap_err();

        assert!(matches!(err, RequestError::InvalidRequest(_)));
        assert!(mock.requests().is_empty());
        assert_eq!(notifier.len(), 1);
    }

    #[tokio::test]
    async fn network_failure_is_reported() {
        let (api, mock, notifier) = client();
        mock.expect(Method::Post, "customers")
            .fail(RequestError::Network("connection refused".into()));

        let err = api.create("customers", &json!({"name": "Jane"})).await.unwrap_err();

        assert_eq!(err, RequestError::Network("connection refused".into()));
        assert_eq!(notifier.messages(), vec!["connection refused".to_string()]);
    }

    #[tokio::test]
    async fn typed_client_unwraps_data_envelope() {
        let (api, mock, notifier) = client();
        mock.expect(Method::Post, "faqs")
            .respond_json(201, json!({"data": {"id": "3", "question": "Refunds?"}}));

        let faqs = api.resource::<Faq>();
        let created = faqs
            .create(&FaqCreate {
                question: "Refunds?".into(),
            })
            .await
            .unwrap();

        assert_eq!(
            created,
            Faq {
                id: "3".into(),
                question: "Refunds?".into()
            }
        );
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"question": "Refunds?"}))
        );
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn typed_decode_failure_is_reported() {
        let (api, mock, notifier) = client();
        mock.expect(Method::Get, "faqs")
            .respond_json(200, json!({"items": []}));

        let err = api
            .resource::<Faq>()
            .list(&QueryParams::new())
            .await
            .unwrap_err();

        assert!(matches!(err, RequestError::Decode(_)));
        assert_eq!(notifier.len(), 1);
    }
}
