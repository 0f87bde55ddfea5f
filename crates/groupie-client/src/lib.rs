//! Remote dataset client for the Groupie catalog.
//!
//! Retrieves the four collections of the Groupie Trackers API (artists,
//! locations, dates, relations) and decodes them into
//! [`groupie_types`] records.
//!
//! # Architecture
//!
//! ```text
//! DataSource (raw body) --> RemoteClient (decode) --> typed collections
//! ```
//!
//! [`HttpSource`] talks to the real API; [`StubSource`] serves canned
//! bodies from memory.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod source;

// Re-export primary types for convenience.
pub use client::RemoteClient;
pub use endpoint::Endpoint;
pub use error::{FetchCause, FetchError};
pub use http::{DEFAULT_API_URL, HttpSource};
pub use source::{DataSource, StubSource};
