//! Handlers for the public API surface.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::chirp::{self, ValidationError};

/// Request body for chirp validation.
#[derive(Debug, Deserialize)]
pub struct ChirpRequest {
    pub body: String,
}

/// Successful validation response.
#[derive(Debug, Serialize)]
pub struct CleanedChirp {
    pub cleaned_body: String,
}

/// Readiness probe. Plain text so load balancers and humans can read it.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Validate a chirp: enforce the length limit and mask denylisted words.
///
/// Decode failures and length violations both map to 400, with distinct
/// error messages. The hit counter is untouched either way.
pub async fn validate_chirp(
    payload: Result<Json<ChirpRequest>, JsonRejection>,
) -> Result<Json<CleanedChirp>, ValidationError> {
    let Json(chirp) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected undecodable chirp payload");
        ValidationError::MalformedInput
    })?;

    let cleaned_body = chirp::validate(&chirp.body)?;
    Ok(Json(CleanedChirp { cleaned_body }))
}
