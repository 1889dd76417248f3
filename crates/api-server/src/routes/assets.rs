//! Embedded single-page client

use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const APP_CSS: &str = include_str!("../../web/app.css");
const APP_JS: &str = include_str!("../../web/app.js");

/// Serve the client files compiled into the binary.
pub async fn embedded_asset(uri: Uri) -> Response {
    match uri.path() {
        "/" | "/index.html" => Html(INDEX_HTML).into_response(),
        "/app.css" => ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], APP_CSS).into_response(),
        "/app.js" => (
            [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
            APP_JS,
        )
            .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
