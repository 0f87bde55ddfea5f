//! Raw body sources and an in-memory stub.
//!
//! A [`DataSource`] returns the undecoded response body for an
//! [`Endpoint`]. Decoding lives in [`RemoteClient`](crate::RemoteClient)
//! so every source goes through the same shape checks. The production
//! source is [`HttpSource`](crate::HttpSource); [`StubSource`] serves
//! canned bodies and is what the tests in this workspace fetch from.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::endpoint::Endpoint;
use crate::error::{FetchCause, FetchError};

/// A source of raw response bodies for the four remote collections.
pub trait DataSource: Send + Sync {
    /// Retrieve the body for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] with [`FetchCause::Transport`] or
    /// [`FetchCause::Status`] when the body cannot be obtained.
    fn get(&self, endpoint: Endpoint) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Per-endpoint request counters.
#[derive(Debug, Default)]
struct CallCounts {
    artists: AtomicUsize,
    locations: AtomicUsize,
    dates: AtomicUsize,
    relations: AtomicUsize,
}

impl CallCounts {
    const fn slot(&self, endpoint: Endpoint) -> &AtomicUsize {
        match endpoint {
            Endpoint::Artists => &self.artists,
            Endpoint::Locations => &self.locations,
            Endpoint::Dates => &self.dates,
            Endpoint::Relations => &self.relations,
        }
    }
}

/// An in-memory [`DataSource`] serving fixed bodies.
///
/// Endpoints without a configured body answer with an empty collection
/// in the endpoint's wire shape. Endpoints marked with
/// [`failing`](Self::failing) answer with a `503` status error.
#[derive(Debug, Default)]
pub struct StubSource {
    bodies: BTreeMap<Endpoint, String>,
    failing: BTreeSet<Endpoint>,
    calls: CallCounts,
}

impl StubSource {
    /// Create a stub where every endpoint returns an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `endpoint`.
    #[must_use]
    pub fn with_body(mut self, endpoint: Endpoint, body: impl Into<String>) -> Self {
        self.bodies.insert(endpoint, body.into());
        self
    }

    /// Make every request to `endpoint` fail.
    #[must_use]
    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// Number of requests made to `endpoint` so far.
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls.slot(endpoint).load(Ordering::SeqCst)
    }

    /// Total number of requests made across all endpoints.
    pub fn total_calls(&self) -> usize {
        Endpoint::ALL
            .iter()
            .map(|&endpoint| self.calls(endpoint))
            .fold(0, usize::saturating_add)
    }

    fn respond(&self, endpoint: Endpoint) -> Result<String, FetchError> {
        self.calls.slot(endpoint).fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(&endpoint) {
            return Err(FetchError::new(endpoint, FetchCause::Status(503)));
        }

        Ok(self.bodies.get(&endpoint).cloned().unwrap_or_else(|| {
            match endpoint {
                Endpoint::Artists => String::from("[]"),
                Endpoint::Locations | Endpoint::Dates | Endpoint::Relations => {
                    String::from(r#"{"index": []}"#)
                }
            }
        }))
    }
}

impl DataSource for StubSource {
    async fn get(&self, endpoint: Endpoint) -> Result<String, FetchError> {
        self.respond(endpoint)
    }
}
