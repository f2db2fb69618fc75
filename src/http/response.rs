//! Response types shared by handlers.
//!
//! Maps chirp validation failures onto the JSON error envelope the API
//! exposes to clients. Both failure kinds are client errors; the envelope
//! keeps them distinguishable by message only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::chirp::ValidationError;

/// JSON error envelope returned on request failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
