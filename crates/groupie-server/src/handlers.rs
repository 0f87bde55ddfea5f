//! HTTP endpoint handlers.
//!
//! Every handler goes through the shared [`Catalog`](groupie_core::Catalog),
//! so whichever request arrives first fills the dataset cache.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | HTML listing of all artists |
//! | `GET` | `/artist/{id}` | HTML detail page for one artist |
//! | `GET` | `/api/artists` | JSON list of all artists |
//! | `GET` | `/api/artists/{id}` | JSON merged view for one artist |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use groupie_client::DataSource;
use groupie_types::{ArtistId, MergedView};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// HTML pages
// ---------------------------------------------------------------------------

/// Render the artist listing page.
pub async fn index<S: DataSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Html<String>, ApiError> {
    let artists = state.catalog.list_all().await?;
    Ok(Html(state.views.render_index(&artists)?))
}

/// Render the detail page for one artist.
pub async fn artist_page<S: DataSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let view = lookup(&state, &id).await?;
    Ok(Html(state.views.render_artist(&view)?))
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

/// List every artist in fetch order.
pub async fn list_artists<S: DataSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let artists = state.catalog.list_all().await?;
    Ok(Json(serde_json::json!({
        "count": artists.len(),
        "artists": artists,
    })))
}

/// Return the merged view for one artist.
pub async fn get_artist<S: DataSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<MergedView>, ApiError> {
    Ok(Json(lookup(&state, &id).await?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate `raw`, resolve it, and turn the zero-valued result into
/// [`ApiError::NotFound`].
async fn lookup<S: DataSource + 'static>(
    state: &AppState<S>,
    raw: &str,
) -> Result<MergedView, ApiError> {
    let id = ArtistId::parse(raw)?;
    let view = state.catalog.resolve(id).await?;
    if !view.is_found() {
        return Err(ApiError::NotFound(id));
    }
    Ok(view)
}
