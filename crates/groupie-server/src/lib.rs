//! HTTP server for the Groupie catalog.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **HTML pages** -- the artist listing (`GET /`) and one page per
//!   artist (`GET /artist/{id}`), rendered with `minijinja`
//! - **JSON endpoints** -- the same two read paths under `/api/artists`
//!
//! # Architecture
//!
//! All handlers read through a shared [`groupie_core::Catalog`] held in
//! [`AppState`]. The catalog fills its dataset cache from the remote API
//! on the first request and serves every later request from memory.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

// Re-export primary types for convenience.
pub use config::{ApiConfig, ConfigError, ServerConfig, ServiceConfig};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
pub use views::{ViewError, Views};
