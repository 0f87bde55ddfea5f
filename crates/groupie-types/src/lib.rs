//! Shared type definitions for the Groupie catalog.
//!
//! These types mirror the four collections served by the remote API
//! (artists, locations, dates, relations) plus the [`MergedView`] the
//! join produces for a single artist.
//!
//! # Modules
//!
//! - [`ids`] -- The numeric [`ArtistId`] join key
//! - [`structs`] -- Remote records, the index envelope and the merged view

pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::{ArtistId, IdError};
pub use structs::{Artist, DateSet, IndexEnvelope, LocationSet, MergedView, RelationMap};
