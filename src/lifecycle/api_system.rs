use crate::clients::{CustomerClient, OrderClient, PricingClient, ProductClient};
use resource_framework::{
    ApiClient, ApiConfig, HttpTransport, MemoryBackend, Notifier, RequestError, TracingNotifier,
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Channel capacity of the in-memory backend.
const BACKEND_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum SystemError {
    /// The HTTP client could not be built from the configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] RequestError),

    #[error("Backend task failed: {0}")]
    TaskFailed(String),
}

/// Every domain client, wired to one backend.
///
/// `ApiSystem` is responsible for:
/// - **Backend selection**: a real server over HTTP, or a [`MemoryBackend`] task
/// - **Client wiring**: all domain clients share one [`ApiClient`], so they share its
///   transport and notifier
/// - **Shutdown**: stopping the backend task, if it owns one
///
/// # Example
///
/// ```rust
/// use mewayz_client::lifecycle::{seed_sample_data, ApiSystem};
///
/// #[tokio::main]
/// async fn main() {
///     let system = ApiSystem::in_memory(seed_sample_data);
///     let plans = system.pricing_client.active_plans().await.unwrap();
///     assert!(!plans.is_empty());
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct ApiSystem {
    /// The name-based client, for collections without a typed domain client.
    pub api: ApiClient,

    pub product_client: ProductClient,
    pub customer_client: CustomerClient,
    pub order_client: OrderClient,
    pub pricing_client: PricingClient,

    /// Backend tasks owned by this system (empty for HTTP).
    handles: Vec<JoinHandle<()>>,
}

impl ApiSystem {
    /// Wires the domain clients to an existing client. Owns no tasks.
    pub fn new(api: ApiClient) -> Self {
        Self::with_handles(api, Vec::new())
    }

    fn with_handles(api: ApiClient, handles: Vec<JoinHandle<()>>) -> Self {
        Self {
            product_client: crate::products::new(&api),
            customer_client: crate::customers::new(&api),
            order_client: crate::orders::new(&api),
            pricing_client: crate::pricing::new(&api),
            api,
            handles,
        }
    }

    /// Talks HTTP to the server named by `config`.
    pub fn http(config: &ApiConfig) -> Result<Self, SystemError> {
        let transport = HttpTransport::new(config)?;
        info!(base_url = %transport.base_url(), "Using HTTP backend");
        Ok(Self::new(ApiClient::new(transport, TracingNotifier)))
    }

    /// [`http`](Self::http) configured from `MEWAYZ_API_URL` and `MEWAYZ_ORIGIN`.
    pub fn from_env() -> Result<Self, SystemError> {
        Self::http(&ApiConfig::from_env())
    }

    /// Spawns a [`MemoryBackend`] loaded by `seed` and wires the clients to it.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn in_memory(seed: impl FnOnce(MemoryBackend) -> MemoryBackend) -> Self {
        Self::in_memory_with_notifier(seed, TracingNotifier)
    }

    /// [`in_memory`](Self::in_memory) with a caller-chosen notifier.
    pub fn in_memory_with_notifier(
        seed: impl FnOnce(MemoryBackend) -> MemoryBackend,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let (backend, transport) = MemoryBackend::new(BACKEND_BUFFER);
        let handle = tokio::spawn(seed(backend).run());
        Self::with_handles(ApiClient::new(transport, notifier), vec![handle])
    }

    /// Drops every client and waits for the backend task to stop.
    ///
    /// The backend stops once its last transport is gone, so clones of the clients held
    /// elsewhere keep it running and this call waits for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.product_client);
        drop(self.customer_client);
        drop(self.order_client);
        drop(self.pricing_client);
        drop(self.api);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Backend task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
