//! Admin surface: hit metrics page and counter reset.
//!
//! No authentication; deploy behind a trusted boundary.

pub mod handlers;

use axum::routing::{get, post};
use axum::Router;

use crate::http::server::AppState;
use self::handlers::{metrics_page, reset_hits};

/// Routes mounted under `/admin`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/admin/metrics", get(metrics_page))
        .route("/admin/reset", post(reset_hits))
}
