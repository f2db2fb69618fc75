//! Hit counting middleware for the static site.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::http::server::AppState;

/// Count the request, then delegate to the wrapped service.
///
/// Applied only to the `/app` sub-router; API and admin routes do not
/// count as hits. The count happens before dispatch, so file-serving
/// misses (404s) are counted too.
pub async fn track_hits(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    state.hits.increment();
    next.run(request).await
}
