//! # MEWAYZ Client
//!
//! > **Typed access to the MEWAYZ admin backend.**
//!
//! Every admin page (products, customers, orders, pricing, and the long tail of
//! payouts, FAQs and statements) talks to the same REST convention: one collection per
//! `/api/<resource>`, JSON in and out. This crate builds on the generic
//! [`resource_framework`] client and adds the typed domain layer on top.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Records and request bodies for each collection.
//!
//! ### 2. The Domains ([`products`], [`customers`], [`orders`], [`pricing`])
//! - **Role**: bind each model to its collection name and define its error type.
//! - **Key items**: [`ProductError`](products::ProductError),
//!   [`OrderError`](orders::OrderError), and a `new(&ApiClient)` factory per domain.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: check input locally, then send. `list` and `remove` come from
//!   [`DomainClient`](resource_framework::DomainClient).
//! - **Key items**: [`ProductClient`](clients::ProductClient),
//!   [`OrderClient`](clients::OrderClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: pick the backend (HTTP or in-memory), wire the clients, shut down.
//! - **Key items**: [`ApiSystem`](lifecycle::ApiSystem).
//!
//! ## ⚠️ Errors
//!
//! Every failed request is reported once through the client's
//! [`Notifier`](resource_framework::Notifier) and then returned as the domain's error.
//! Input rejected by a client's own checks is returned without a notice: nothing was
//! sent, so there is nothing to report.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # In-memory backend with sample data
//! RUST_LOG=info cargo run
//!
//! # A running server
//! MEWAYZ_API_URL=http://localhost:3000/api RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod customers;
pub mod lifecycle;
pub mod model;
pub mod orders;
pub mod pricing;
pub mod products;
