//! Tidemark Account Client
//!
//! Blocking HTTP client for the remote account service. Covers the four
//! account lifecycle operations:
//!
//! - register (`POST /register`)
//! - login (`POST /login`)
//! - password change (`PATCH /account/password`, bearer session token)
//! - delete (`DELETE /account`, bearer session token)
//!
//! Authenticated operations log in fresh on every call and discard the
//! session token afterwards; there is no token cache and therefore no
//! stale-token state to invalidate. The remote service is the sole source
//! of truth for account state.

pub mod client;
pub mod host;

pub use client::AccountClient;
pub use host::{resolve_host, DEFAULT_HOST, HOST_ENV};

use thiserror::Error;

/// Errors from account service operations
#[derive(Error, Debug)]
pub enum AccountError {
    /// Network or connection failure reaching the service. Never retried
    /// here; retry policy belongs to the caller.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered outside the wire contract
    #[error("malformed response from account service")]
    MalformedResponse,

    /// The service rejected the request with a structured reason,
    /// surfaced verbatim
    #[error("{0}")]
    Service(String),
}
