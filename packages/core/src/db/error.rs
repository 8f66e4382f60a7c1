//! Store Error Types
//!
//! Error types for backend data access. These errors never cross the service
//! boundary unhandled: the loader catches them, logs, and degrades to an
//! empty collection for the affected entity kind.

use thiserror::Error;

/// Backend store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to construct the HTTP client
    #[error("failed to construct HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request to a collection endpoint failed (network / transport)
    #[error("request to '{table}' failed: {source}")]
    Request {
        table: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("unexpected status {status} querying '{table}'")]
    UnexpectedStatus {
        table: &'static str,
        status: reqwest::StatusCode,
    },

    /// Response body did not decode into the expected record shape
    #[error("failed to decode '{table}' response: {source}")]
    Decode {
        table: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Required configuration variable is missing or empty
    #[error("missing configuration: {var}")]
    MissingConfig { var: &'static str },
}

impl StoreError {
    /// Create a request failed error
    pub fn request(table: &'static str, source: reqwest::Error) -> Self {
        Self::Request { table, source }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(table: &'static str, status: reqwest::StatusCode) -> Self {
        Self::UnexpectedStatus { table, status }
    }

    /// Create a decode failed error
    pub fn decode(table: &'static str, source: reqwest::Error) -> Self {
        Self::Decode { table, source }
    }

    /// Create a missing configuration error
    pub fn missing_config(var: &'static str) -> Self {
        Self::MissingConfig { var }
    }
}
