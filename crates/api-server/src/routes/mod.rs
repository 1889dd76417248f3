//! Route handlers

pub mod assets;
pub mod quicklink;
pub mod task;
pub mod time;

use std::path::Path;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Handler rejection: status plus a plain-text body
pub type ApiError = (StatusCode, String);

/// Raw query pairs in request order. Repeated keys are kept; lookups take
/// the first occurrence.
pub type QueryPairs = Vec<(String, String)>;

pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// The `id` query parameter. Missing or unparsable values share one message.
pub fn parse_id(pairs: &[(String, String)]) -> Result<i64, ApiError> {
    first_param(pairs, "id")
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| bad_request("invalid id"))
}

/// Empty 204 that still advertises the endpoint's JSON content type.
pub fn no_content() -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        StatusCode::NO_CONTENT,
    )
        .into_response()
}

pub fn bad_request(message: impl Into<String>) -> ApiError {
    let message = message.into();
    tracing::debug!("Rejected request: {}", message);
    (StatusCode::BAD_REQUEST, message)
}

pub fn internal_error(err: tick_core::Error) -> ApiError {
    tracing::error!("Store operation failed: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// Assemble the full application: API routes, clock and client assets.
pub fn build_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .merge(task::router())
        .merge(quicklink::router())
        .merge(time::router())
        .with_state(state);

    let app = match static_dir {
        Some(dir) => {
            let embedded: MethodRouter = get(assets::embedded_asset);
            app.fallback_service(ServeDir::new(dir).fallback(embedded))
        }
        None => app.fallback(assets::embedded_asset),
    };

    app.layer(TraceLayer::new_for_http())
}
