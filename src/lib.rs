//! Rust and Python-facing client library for the Aircall REST API.
//!
//! Public API layers:
//! - [`build_request`]/[`PreparedRequest`]: turn a route, parameters and verb
//!   into a request shape (query string or JSON/form body).
//! - [`ApiClient`]/[`BlockingApiClient`]: authenticated transports that send
//!   prepared requests and classify responses by status.
//! - [`AircallClient`]/[`BlockingAircallClient`]: one method per endpoint
//!   (users, teams, numbers, calls, contacts, webhooks).
//! - [`ClientError`]: unified error type used by all clients.

mod aircall_client;
mod auth;
mod blocking_client;
mod client;
mod error;
mod request;
mod routes;

/// Endpoint clients.
pub use aircall_client::{AircallClient, BlockingAircallClient};
/// Credentials used for HTTP Basic authentication.
pub use auth::Credentials;
/// Generic blocking Aircall transport.
pub use blocking_client::BlockingApiClient;
/// Generic async Aircall transport.
pub use client::{ApiClient, DEFAULT_BASE_URL};
/// Error type returned by all client operations.
pub use error::ClientError;
/// Request shaping and status classification.
pub use request::{ContentType, PreparedRequest, RequestBody, build_request, is_status_ok};
/// Endpoint catalog.
pub use routes::{OPERATIONS, OperationDefinition, find_operation};

#[cfg(feature = "python")]
mod python;
