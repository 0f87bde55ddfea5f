//! Dataset cache and join engine for the Groupie catalog.
//!
//! The four remote collections are fetched once per process and kept in
//! memory. Requests read them through a [`Catalog`], which offers the
//! listing path and the per-artist detail path.
//!
//! # Modules
//!
//! - [`cache`] -- [`DatasetCache`] with its lazy, single-flight fill
//! - [`join`] -- Identifier join and relation flattening
//! - [`catalog`] -- [`Catalog`] tying the client, cache and join together

pub mod cache;
pub mod catalog;
pub mod join;

pub use cache::{DatasetCache, Datasets};
pub use catalog::Catalog;
pub use join::{flatten_relations, resolve};
