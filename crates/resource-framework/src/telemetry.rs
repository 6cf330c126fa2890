//! # Observability
//!
//! Everything in the framework logs through `tracing`:
//!
//! - **Client operations** are `#[instrument]`ed, so each request runs inside a span
//!   named after the operation with the resource and id as fields.
//! - **Failures** are logged at `warn` before they reach the notifier.
//! - **Backend lifecycle** (start, create, update, delete, shutdown) is logged at `info`.
//! - **Wire details** (URL, status, body size) are logged at `debug`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per mutation and failure
//! RUST_LOG=debug cargo run    # every request and response
//! ```

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Call once at startup. Module paths are hidden; spans carry the resource name.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
