use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, Uri},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::error::StorefrontError;
use crate::ui::render::{Page, render_page};
use crate::ui::routes::HOME_PATH;

/// Build the storefront router.
///
/// - `GET /` renders the landing page
/// - `/static/*` serves the configured asset directory
/// - anything else renders the not-found page with 404
pub fn router(state: AppState) -> Router {
    let timeout_duration = state.config.resilience.request_timeout();

    Router::new()
        .route(HOME_PATH, get(index_handler))
        .nest_service(
            "/static",
            ServeDir::new(&state.config.assets.static_dir),
        )
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn_with_state(
            timeout_duration,
            timeout_middleware,
        ))
        .with_state(state)
}

/// Answer `408 Request Timeout` when the inner service outlives `duration`.
pub async fn timeout_middleware(
    State(duration): State<Duration>,
    req: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(duration, next.run(req)).await {
        Ok(res) => res,
        Err(_) => {
            debug!(name: "request.timed_out", timeout_secs = duration.as_secs(), "Request timed out");
            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
        }
    }
}

/// Bind the configured address and serve until the process exits.
pub async fn start_server(state: AppState) -> Result<(), StorefrontError> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StorefrontError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        static_dir = %state.config.assets.static_dir,
        "Server started"
    );

    axum::serve(listener, router(state).into_make_service())
        .await
        .map_err(StorefrontError::Serve)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_page(Page::Landing, state.clock.as_ref()))
}

/// Fallback - Not found page.
async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    debug!(name: "page.not_found", path = %uri.path(), "No handler for path");
    (
        StatusCode::NOT_FOUND,
        Html(render_page(Page::NotFound, state.clock.as_ref())),
    )
}
