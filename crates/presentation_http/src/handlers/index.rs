//! Documentation landing page
//!
//! The landing page itself participates in the simulation: its status is
//! drawn from the same fixed set the simulators use, so even discovery
//! requests exercise client status handling.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::state::AppState;

const INDEX_HTML: &str = r#"<h1>faultline</h1>
<p>endpoints to simulate backend issues:</p>

<ul>
  <li><code>/</code> - random status code</li>
  <li><code>/status/404</code> - specific status code</li>
  <li><code>/flaky/50</code> - fails 50% of the time</li>
  <li><code>/delay/5</code> - 5 second delay</li>
  <li><code>/memory/10</code> - allocate 10mb</li>
  <li><code>/cpu/2</code> - cpu spike for 2s</li>
  <li><code>/chain/3</code> - 3 chained requests</li>
  <li><code>/size/1024</code> - 1mb response</li>
  <li><code>/stream/10</code> - stream for 10s</li>
  <li><code>/headers</code> - show request headers</li>
</ul>
"#;

/// Serve the endpoint listing under a randomly drawn status code
pub async fn index(State(state): State<AppState>) -> Response {
    let code = state.status_selector.random_status();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::OK);
    (status, Html(INDEX_HTML)).into_response()
}
