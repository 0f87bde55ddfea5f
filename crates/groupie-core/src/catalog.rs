//! The two read paths served over the cached datasets.
//!
//! [`Catalog`] owns the remote client and the dataset cache. Both
//! [`list_all`](Catalog::list_all) and [`resolve`](Catalog::resolve)
//! make sure the cache is filled before reading from it, so the first
//! request of the process pays for the fetches.

use std::sync::Arc;

use groupie_client::{DataSource, FetchError, RemoteClient};
use groupie_types::{Artist, ArtistId, MergedView};
use tracing::debug;

use crate::cache::DatasetCache;
use crate::join;

/// Listing and detail access to the artist catalog.
#[derive(Debug, Default)]
pub struct Catalog<S> {
    client: Arc<RemoteClient<S>>,
    cache: DatasetCache,
}

impl<S: DataSource + 'static> Catalog<S> {
    /// Create a catalog with an empty cache backed by `source`.
    pub fn new(source: S) -> Self {
        Self {
            client: Arc::new(RemoteClient::new(source)),
            cache: DatasetCache::new(),
        }
    }

    /// The remote client used to fill the cache.
    pub fn client(&self) -> &RemoteClient<S> {
        &self.client
    }

    /// The dataset cache.
    pub const fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Fill the cache if it is still empty.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if any collection fails to load. See
    /// [`DatasetCache::ensure_populated`] for partial-fill behavior.
    pub async fn ensure_populated(&self) -> Result<(), FetchError> {
        self.cache.ensure_populated(&self.client).await
    }

    /// Every cached artist, in fetch order.
    pub async fn list_all(&self) -> Result<Vec<Artist>, FetchError> {
        self.ensure_populated().await?;
        Ok(self.cache.read().await.artists.clone())
    }

    /// The merged view for `id`.
    ///
    /// An unknown `id` is not an error: the returned view carries a
    /// zero-valued artist (see [`MergedView::is_found`]).
    pub async fn resolve(&self, id: ArtistId) -> Result<MergedView, FetchError> {
        self.ensure_populated().await?;
        let view = join::resolve(&*self.cache.read().await, id);
        debug!(
            %id,
            found = view.is_found(),
            locations = view.locations.len(),
            relations = view.relations.len(),
            "artist resolved"
        );
        Ok(view)
    }
}
