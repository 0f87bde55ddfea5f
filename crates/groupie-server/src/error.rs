//! Error types for the HTTP layer.
//!
//! [`ApiError`] unifies all request failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use groupie_client::FetchError;
use groupie_types::{ArtistId, IdError};
use tracing::{error, warn};

use crate::views::ViewError;

/// Errors that can occur while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The path segment is not a positive integer.
    #[error("invalid artist id: {0}")]
    MalformedIdentifier(#[from] IdError),

    /// No artist carries the requested identifier.
    #[error("artist {0} not found")]
    NotFound(ArtistId),

    /// The remote API could not supply the datasets.
    #[error("upstream error: {0}")]
    Fetch(#[from] FetchError),

    /// A page template failed to render.
    #[error("render error: {0}")]
    Render(#[from] ViewError),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Fetch(e) => warn!(error = %e, "request failed on upstream fetch"),
            Self::Render(e) => error!(error = %e, "template render failed"),
            Self::MalformedIdentifier(_) | Self::NotFound(_) => {}
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
