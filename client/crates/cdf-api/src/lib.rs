//! Typed client for the CDF administration REST backend.
//!
//! Every call either yields the backend's `data` payload or an [`ApiError`]
//! produced by the shared [`Normalizer`]. Callers that need the wire-shaped
//! `{status, data | message}` value convert with [`ApiEnvelope::from`].

pub mod api_error;
pub mod client;
pub mod envelope;
pub mod models;
pub mod normalizer;
pub mod pagination;
pub mod services;
pub mod transport_error;

pub use api_error::{ApiError, ErrorKind, Result as ClientResult};
pub use client::Client;
pub use envelope::ApiEnvelope;
pub use normalizer::{
    NETWORK_ERROR_MESSAGE, NOT_FOUND_MESSAGE, Normalizer, SERVER_ERROR_MESSAGE,
    SESSION_EXPIRED_MESSAGE, extract_message, flatten_field_errors,
};
pub use pagination::{Page, paginate};
pub use transport_error::{Result as TransportResult, TransportError};

/// Route the dashboard returns to when the session is gone.
pub const LOGIN_ROUTE: &str = "/";

#[cfg(test)]
mod tests;
