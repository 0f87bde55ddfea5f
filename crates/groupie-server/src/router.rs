//! Axum router construction.
//!
//! Assembles the page and JSON routes into a single [`Router`] with
//! request tracing and a permissive CORS policy for the read-only API.

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use groupie_client::DataSource;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- artist listing page
/// - `GET /artist/{id}` -- artist detail page
/// - `GET /api/artists` -- artist list as JSON
/// - `GET /api/artists/{id}` -- merged view as JSON
///
/// Other methods on these paths get `405`; unknown paths get `404`.
pub fn build_router<S: DataSource + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(handlers::index::<S>))
        .route("/artist/{id}", get(handlers::artist_page::<S>))
        // JSON API
        .route("/api/artists", get(handlers::list_artists::<S>))
        .route("/api/artists/{id}", get(handlers::get_artist::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
