//! Handlers for the admin surface.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::http::server::AppState;

/// Admin metrics page. The handler only supplies the integer.
const METRICS_TEMPLATE: &str = "\
<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>";

/// Render the hit counter as an HTML page.
pub async fn metrics_page(State(state): State<AppState>) -> Html<String> {
    let hits = state.hits.read();
    Html(METRICS_TEMPLATE.replace("{hits}", &hits.to_string()))
}

/// Reset the hit counter to zero.
pub async fn reset_hits(State(state): State<AppState>) -> impl IntoResponse {
    state.hits.reset();
    tracing::info!("Hit counter reset");
    (StatusCode::OK, "Hits reset to 0")
}
