//! Shared application state for the Groupie server.
//!
//! [`AppState`] owns the [`Catalog`] (and through it the dataset cache)
//! plus the compiled page templates. It is wrapped in [`Arc`] and handed
//! to every handler through Axum's `State` extractor, so all requests
//! share one cache.
//!
//! [`Arc`]: std::sync::Arc

use groupie_client::DataSource;
use groupie_core::Catalog;

use crate::views::{ViewError, Views};

/// Shared state for the Axum application.
#[derive(Debug)]
pub struct AppState<S> {
    /// Listing and detail access to the cached datasets.
    pub catalog: Catalog<S>,
    /// Compiled page templates.
    pub views: Views,
}

impl<S: DataSource + 'static> AppState<S> {
    /// Create state with an empty cache backed by `source`.
    pub fn new(source: S) -> Result<Self, ViewError> {
        Ok(Self {
            catalog: Catalog::new(source),
            views: Views::new()?,
        })
    }
}
