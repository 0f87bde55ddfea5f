//! Error types for the remote dataset client.
//!
//! Every failure names the [`Endpoint`] it happened on so the caller can
//! report which collection could not be loaded.

use crate::endpoint::Endpoint;

/// A failed retrieval of one remote collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to fetch {endpoint}: {cause}")]
pub struct FetchError {
    /// The collection that could not be loaded.
    pub endpoint: Endpoint,
    /// What went wrong.
    pub cause: FetchCause,
}

impl FetchError {
    /// Create a fetch error for `endpoint`.
    pub const fn new(endpoint: Endpoint, cause: FetchCause) -> Self {
        Self { endpoint, cause }
    }
}

/// Why a retrieval failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchCause {
    /// The request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("API returned status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The task loading the collection stopped before returning.
    #[error("fill interrupted: {0}")]
    Interrupted(String),
}
