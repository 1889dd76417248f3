//! Quicklink API endpoints

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use tick_core::quicklink::{Quicklink, QuicklinkRepository};

use super::{bad_request, internal_error, no_content, parse_id, ApiError, QueryPairs};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateQuicklinkRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// GET /api/quicklinks
async fn list_quicklinks(State(state): State<AppState>) -> Result<Json<Vec<Quicklink>>, ApiError> {
    let links = state
        .store()
        .list_quicklinks()
        .await
        .map_err(internal_error)?;
    Ok(Json(links))
}

/// POST /api/quicklinks
async fn create_quicklink(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Quicklink>, ApiError> {
    let req: CreateQuicklinkRequest =
        serde_json::from_slice(&body).map_err(|e| bad_request(e.to_string()))?;

    let name = req.name.unwrap_or_default();
    if name.is_empty() {
        return Err(bad_request("name is required"));
    }
    let url = req.url.unwrap_or_default();
    if url.is_empty() {
        return Err(bad_request("url is required"));
    }

    let link = state
        .store()
        .create_quicklink(&name, &url)
        .await
        .map_err(internal_error)?;
    Ok(Json(link))
}

/// DELETE /api/quicklinks?id= - unknown ids are not an error
async fn delete_quicklink(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let id = parse_id(&query)?;
    state
        .store()
        .delete_quicklink(id)
        .await
        .map_err(internal_error)?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/quicklinks",
        get(list_quicklinks)
            .post(create_quicklink)
            .delete(delete_quicklink),
    )
}
