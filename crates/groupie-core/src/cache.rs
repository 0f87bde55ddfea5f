//! Process-lifetime cache of the four remote collections.
//!
//! [`DatasetCache::ensure_populated`] fills the cache on first use and is
//! a no-op afterwards. The fill is serialized behind the cache's write
//! lock, so concurrent first requests trigger a single round of fetches.
//! The cache is never refreshed or invalidated.
//!
//! The fill runs on its own task that owns the write guard. Callers only
//! await it, so a request dropped mid-fill does not stop the fetches.
//!
//! # Partial fills
//!
//! Collections are fetched in the order artists, locations, dates,
//! relations. Each one is stored as soon as it decodes and the fill stops
//! at the first failure without rolling back. Because "populated" means
//! "the artist collection is non-empty", a fill that stored artists and
//! then failed is never retried: every later call is a no-op and the
//! remaining collections stay empty until restart.

use std::sync::Arc;

use groupie_client::{DataSource, Endpoint, FetchCause, FetchError, RemoteClient};
use groupie_types::{Artist, DateSet, LocationSet, RelationMap};
use tokio::sync::{OwnedRwLockWriteGuard, RwLock, RwLockReadGuard};
use tracing::{debug, error, info, warn};

/// The four decoded collections, in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Datasets {
    /// Artists, in API order.
    pub artists: Vec<Artist>,
    /// Location sets.
    pub locations: Vec<LocationSet>,
    /// Date sets.
    pub dates: Vec<DateSet>,
    /// Relation maps.
    pub relations: Vec<RelationMap>,
}

impl Datasets {
    /// Whether the artist collection has been loaded.
    pub fn is_populated(&self) -> bool {
        !self.artists.is_empty()
    }

    /// The first collection, in fetch order, that holds no records.
    fn first_empty(&self) -> Endpoint {
        if self.artists.is_empty() {
            Endpoint::Artists
        } else if self.locations.is_empty() {
            Endpoint::Locations
        } else if self.dates.is_empty() {
            Endpoint::Dates
        } else {
            Endpoint::Relations
        }
    }
}

/// Lazily filled, never refreshed store for [`Datasets`].
#[derive(Debug, Default)]
pub struct DatasetCache {
    data: Arc<RwLock<Datasets>>,
}

impl DatasetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the cache from `client` unless the artist collection is
    /// already present.
    ///
    /// The fetches run on a spawned task. Dropping the returned future
    /// stops the wait, not the fill.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] encountered. Collections fetched
    /// before the failure stay in the cache. A fill task that panics or is
    /// cancelled reports [`FetchCause::Interrupted`] against the first
    /// collection still missing.
    pub async fn ensure_populated<S: DataSource + 'static>(
        &self,
        client: &Arc<RemoteClient<S>>,
    ) -> Result<(), FetchError> {
        if self.data.read().await.is_populated() {
            debug!("dataset cache hit");
            return Ok(());
        }

        let data = Arc::clone(&self.data).write_owned().await;
        // Another request may have filled the cache while we waited.
        if data.is_populated() {
            debug!("dataset cache filled by concurrent request");
            return Ok(());
        }

        let task = tokio::spawn(fill(data, Arc::clone(client)));
        match task.await {
            Ok(result) => result,
            Err(e) => {
                let endpoint = self.data.read().await.first_empty();
                error!(%endpoint, error = %e, "dataset cache fill task stopped");
                Err(FetchError::new(endpoint, FetchCause::Interrupted(e.to_string())))
            }
        }
    }

    /// Read access to the cached collections.
    pub async fn read(&self) -> RwLockReadGuard<'_, Datasets> {
        self.data.read().await
    }
}

/// Fetch and store the four collections in order while holding `data`.
async fn fill<S: DataSource>(
    mut data: OwnedRwLockWriteGuard<Datasets>,
    client: Arc<RemoteClient<S>>,
) -> Result<(), FetchError> {
    info!("filling dataset cache");
    data.artists = record(Endpoint::Artists, client.fetch_artists().await)?;
    data.locations = record(Endpoint::Locations, client.fetch_locations().await)?;
    data.dates = record(Endpoint::Dates, client.fetch_dates().await)?;
    data.relations = record(Endpoint::Relations, client.fetch_relations().await)?;

    info!(
        artists = data.artists.len(),
        locations = data.locations.len(),
        dates = data.dates.len(),
        relations = data.relations.len(),
        "dataset cache populated"
    );
    Ok(())
}

/// Log the outcome of one collection fetch and pass it through.
fn record<T>(
    endpoint: Endpoint,
    result: Result<Vec<T>, FetchError>,
) -> Result<Vec<T>, FetchError> {
    match result {
        Ok(records) => {
            info!(%endpoint, records = records.len(), "collection fetched");
            Ok(records)
        }
        Err(e) => {
            warn!(%endpoint, error = %e, "collection fetch failed, cache fill aborted");
            Err(e)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use groupie_client::StubSource;

    use super::*;

    const ARTISTS: &str = r#"[{"id": 1, "image": "", "name": "Queen", "members": [],
        "creationDate": 1970, "firstAlbum": "14-12-1973"}]"#;

    #[tokio::test]
    async fn fills_in_endpoint_order() {
        let client = Arc::new(RemoteClient::new(
            StubSource::new().with_body(Endpoint::Artists, ARTISTS),
        ));
        let cache = DatasetCache::new();

        cache.ensure_populated(&client).await.unwrap();

        for endpoint in Endpoint::ALL {
            assert_eq!(client.source().calls(endpoint), 1, "{endpoint}");
        }
        assert_eq!(cache.read().await.artists.len(), 1);
    }

    #[tokio::test]
    async fn second_call_is_a_no_op() {
        let client = Arc::new(RemoteClient::new(
            StubSource::new().with_body(Endpoint::Artists, ARTISTS),
        ));
        let cache = DatasetCache::new();

        cache.ensure_populated(&client).await.unwrap();
        cache.ensure_populated(&client).await.unwrap();

        assert_eq!(client.source().total_calls(), 4);
    }

    #[tokio::test]
    async fn failure_stops_the_fill_and_keeps_earlier_collections() {
        let client = Arc::new(RemoteClient::new(
            StubSource::new()
                .with_body(Endpoint::Artists, ARTISTS)
                .failing(Endpoint::Dates),
        ));
        let cache = DatasetCache::new();

        let err = cache.ensure_populated(&client).await.unwrap_err();
        assert_eq!(err.endpoint, Endpoint::Dates);
        assert_eq!(client.source().calls(Endpoint::Relations), 0);

        let data = cache.read().await;
        assert_eq!(data.artists.len(), 1);
        assert!(data.relations.is_empty());
    }

    #[tokio::test]
    async fn partial_fill_is_never_retried() {
        let client = Arc::new(RemoteClient::new(
            StubSource::new()
                .with_body(Endpoint::Artists, ARTISTS)
                .failing(Endpoint::Locations),
        ));
        let cache = DatasetCache::new();

        assert!(cache.ensure_populated(&client).await.is_err());
        // Artists are present, so the cache counts as populated.
        assert!(cache.ensure_populated(&client).await.is_ok());

        assert_eq!(client.source().calls(Endpoint::Artists), 1);
        assert_eq!(client.source().calls(Endpoint::Locations), 1);
        assert_eq!(client.source().calls(Endpoint::Dates), 0);
    }

    #[tokio::test]
    async fn artist_failure_leaves_cache_empty_and_retryable() {
        let client = Arc::new(RemoteClient::new(StubSource::new().failing(Endpoint::Artists)));
        let cache = DatasetCache::new();

        assert!(cache.ensure_populated(&client).await.is_err());
        assert!(cache.ensure_populated(&client).await.is_err());

        assert_eq!(client.source().calls(Endpoint::Artists), 2);
        assert!(!cache.read().await.is_populated());
    }

    #[test]
    fn first_empty_follows_fetch_order() {
        let mut data = Datasets::default();
        assert_eq!(data.first_empty(), Endpoint::Artists);

        data.artists.push(Artist::default());
        assert_eq!(data.first_empty(), Endpoint::Locations);

        data.locations.push(LocationSet::default());
        data.dates.push(DateSet::default());
        assert_eq!(data.first_empty(), Endpoint::Relations);
    }
}
