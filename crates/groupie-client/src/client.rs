//! Typed retrieval of the four remote collections.
//!
//! [`RemoteClient`] pulls a raw body from its [`DataSource`] and decodes
//! it into the collection's record type. The artists endpoint returns a
//! bare array; the other three wrap their records in an
//! [`IndexEnvelope`].

use groupie_types::{Artist, DateSet, IndexEnvelope, LocationSet, RelationMap};
use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::{FetchCause, FetchError};
use crate::source::DataSource;

/// Fetches and decodes remote collections from a [`DataSource`].
#[derive(Debug, Default)]
pub struct RemoteClient<S> {
    source: S,
}

impl<S: DataSource> RemoteClient<S> {
    /// Wrap `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying body source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetch all artists, in API order.
    pub async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError> {
        self.fetch(Endpoint::Artists).await
    }

    /// Fetch all location sets.
    pub async fn fetch_locations(&self) -> Result<Vec<LocationSet>, FetchError> {
        let envelope: IndexEnvelope<LocationSet> = self.fetch(Endpoint::Locations).await?;
        Ok(envelope.index)
    }

    /// Fetch all date sets.
    pub async fn fetch_dates(&self) -> Result<Vec<DateSet>, FetchError> {
        let envelope: IndexEnvelope<DateSet> = self.fetch(Endpoint::Dates).await?;
        Ok(envelope.index)
    }

    /// Fetch all relation maps.
    pub async fn fetch_relations(&self) -> Result<Vec<RelationMap>, FetchError> {
        let envelope: IndexEnvelope<RelationMap> = self.fetch(Endpoint::Relations).await?;
        Ok(envelope.index)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let body = self.source.get(endpoint).await?;
        decode(endpoint, &body)
    }
}

/// Decode a response body for `endpoint` into `T`.
fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body)
        .map_err(|e| FetchError::new(endpoint, FetchCause::Decode(e.to_string())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use groupie_types::ArtistId;

    use super::*;
    use crate::source::StubSource;

    const ARTISTS: &str = r#"[
        {"id": 1, "image": "a.jpeg", "name": "Queen", "members": ["Freddie Mercury"],
         "creationDate": 1970, "firstAlbum": "14-12-1973"},
        {"id": 2, "image": "b.jpeg", "name": "SOJA", "members": ["Jacob Hemphill"],
         "creationDate": 1997, "firstAlbum": "05-06-2002"}
    ]"#;

    #[tokio::test]
    async fn artists_decode_from_bare_array() {
        let client = RemoteClient::new(StubSource::new().with_body(Endpoint::Artists, ARTISTS));
        let artists = client.fetch_artists().await.unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists.first().map(|a| a.id), Some(ArtistId(1)));
        assert_eq!(artists.last().map(|a| a.name.as_str()), Some("SOJA"));
    }

    #[tokio::test]
    async fn locations_are_unwrapped_from_index() {
        let body = r#"{"index": [{"id": 1, "locations": ["london-uk", "paris-france"]}]}"#;
        let client = RemoteClient::new(StubSource::new().with_body(Endpoint::Locations, body));
        let locations = client.fetch_locations().await.unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(
            locations.first().map(|l| l.locations.clone()),
            Some(vec!["london-uk".to_owned(), "paris-france".to_owned()])
        );
    }

    #[tokio::test]
    async fn relations_are_unwrapped_from_index() {
        let body = r#"{"index": [{"id": 3, "datesLocations": {"lima-peru": ["01-01-2020"]}}]}"#;
        let client = RemoteClient::new(StubSource::new().with_body(Endpoint::Relations, body));
        let relations = client.fetch_relations().await.unwrap();
        assert_eq!(relations.first().map(|r| r.id), Some(ArtistId(3)));
    }

    #[tokio::test]
    async fn wrong_shape_is_a_decode_error() {
        // Dates served as a bare array instead of the index envelope.
        let client = RemoteClient::new(
            StubSource::new().with_body(Endpoint::Dates, r#"[{"id": 1, "dates": []}]"#),
        );
        let err = client.fetch_dates().await.unwrap_err();
        assert_eq!(err.endpoint, Endpoint::Dates);
        assert!(matches!(err.cause, FetchCause::Decode(_)));
    }

    #[tokio::test]
    async fn source_failure_propagates_unchanged() {
        let client = RemoteClient::new(StubSource::new().failing(Endpoint::Artists));
        let err = client.fetch_artists().await.unwrap_err();
        assert_eq!(err, FetchError::new(Endpoint::Artists, FetchCause::Status(503)));
    }
}
