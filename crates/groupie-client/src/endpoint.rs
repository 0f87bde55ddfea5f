//! The four remote collections and their URL paths.

/// One of the four collections served by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    /// `GET {base}/artists` -- bare JSON array of artists.
    Artists,
    /// `GET {base}/locations` -- `{"index": [...]}` of location sets.
    Locations,
    /// `GET {base}/dates` -- `{"index": [...]}` of date sets.
    Dates,
    /// `GET {base}/relation` -- `{"index": [...]}` of relation maps.
    Relations,
}

impl Endpoint {
    /// All endpoints in cache-fill order.
    pub const ALL: [Self; 4] = [Self::Artists, Self::Locations, Self::Dates, Self::Relations];

    /// Path segment appended to the API base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Locations => "locations",
            Self::Dates => "dates",
            // The API names this one in the singular.
            Self::Relations => "relation",
        }
    }

    /// Human-readable name for logs and errors.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Locations => "locations",
            Self::Dates => "dates",
            Self::Relations => "relations",
        }
    }

    /// Join the endpoint path onto `base_url`.
    pub fn url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
