//! Record types decoded from the remote API and the merged view built
//! from them.
//!
//! Field names follow the API's camelCase wire format. Records are never
//! mutated after decoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::ArtistId;

// ---------------------------------------------------------------------------
// Remote records
// ---------------------------------------------------------------------------

/// A performing act as returned by the artists endpoint.
///
/// The [`Default`] value is the zero-valued artist returned by the join
/// when no record matches the requested identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Join key shared with the other three collections.
    pub id: ArtistId,
    /// Image URL.
    pub image: String,
    /// Display name.
    pub name: String,
    /// Band members in the order the API lists them.
    pub members: Vec<String>,
    /// Year the act was formed.
    #[serde(rename = "creationDate")]
    pub creation_date: u32,
    /// Release date of the first album, kept as the API's `dd-mm-yyyy` text.
    #[serde(rename = "firstAlbum")]
    pub first_album: String,
}

/// Concert locations for one artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSet {
    /// Artist this record belongs to.
    pub id: ArtistId,
    /// Location strings, e.g. `north_carolina-usa`.
    pub locations: Vec<String>,
}

/// Concert dates for one artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSet {
    /// Artist this record belongs to.
    pub id: ArtistId,
    /// Date strings in API order.
    pub dates: Vec<String>,
}

/// Location-to-dates relation for one artist.
///
/// Keys are unordered on the wire; each key's dates keep their order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMap {
    /// Artist this record belongs to.
    pub id: ArtistId,
    /// Dates played at each location.
    #[serde(rename = "datesLocations")]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// The `{"index": [...]}` wrapper used by the locations, dates and
/// relation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEnvelope<T> {
    /// Wrapped records.
    pub index: Vec<T>,
}

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// One artist joined with its locations, dates and flattened relations.
///
/// Request-scoped and never stored. Serializes flat: the artist fields
/// sit next to `locations`, `dates` and `relations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergedView {
    /// The matched artist, or [`Artist::default`] when none matched.
    #[serde(flatten)]
    pub artist: Artist,
    /// Locations from the first matching [`LocationSet`].
    pub locations: Vec<String>,
    /// Dates from the first matching [`DateSet`].
    pub dates: Vec<String>,
    /// `"location date"` pairs from the first matching [`RelationMap`].
    pub relations: Vec<String>,
}

impl MergedView {
    /// Whether the join found an artist for the requested identifier.
    pub const fn is_found(&self) -> bool {
        self.artist.id.is_known()
    }
}
