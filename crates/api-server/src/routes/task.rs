//! Task API endpoints
//!
//! One path, dispatched on method: list, create, toggle and delete.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use tick_core::clock;
use tick_core::task::{Task, TaskRepository, ToggleOutcome};

use super::{bad_request, first_param, internal_error, no_content, parse_id, ApiError, QueryPairs};
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Empty or missing dates mean today.
fn date_or_today(date: Option<&str>) -> String {
    match date {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => clock::today(),
    }
}

const TASK_NOT_FOUND: &str = "task not found";

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks?date= - List tasks for a day
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let date = date_or_today(first_param(&query, "date"));
    let tasks = state
        .store()
        .list_tasks(&date)
        .await
        .map_err(internal_error)?;
    Ok(Json(tasks))
}

/// POST /api/tasks - Create a task
async fn create_task(State(state): State<AppState>, body: Bytes) -> Result<Json<Task>, ApiError> {
    let req: CreateTaskRequest =
        serde_json::from_slice(&body).map_err(|e| bad_request(e.to_string()))?;

    let title = req.title.unwrap_or_default();
    if title.is_empty() {
        return Err(bad_request("title is required"));
    }
    let date = date_or_today(req.date.as_deref());

    let task = state
        .store()
        .create_task(&title, &date)
        .await
        .map_err(internal_error)?;
    Ok(Json(task))
}

/// PATCH /api/tasks?id= - Flip the completed flag
async fn toggle_task(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<ToggleOutcome>, ApiError> {
    let id = parse_id(&query)?;
    match state.store().toggle_task(id).await {
        Ok(completed) => Ok(Json(ToggleOutcome { completed })),
        Err(e) => {
            if !e.is_not_found() {
                tracing::warn!("Toggle of task {} failed: {}", id, e);
            }
            Err((StatusCode::NOT_FOUND, TASK_NOT_FOUND.to_string()))
        }
    }
}

/// DELETE /api/tasks?id= - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let id = parse_id(&query)?;
    match state.store().delete_task(id).await {
        Ok(()) => Ok(no_content()),
        Err(e) => {
            if !e.is_not_found() {
                tracing::warn!("Delete of task {} failed: {}", id, e);
            }
            Err((StatusCode::NOT_FOUND, TASK_NOT_FOUND.to_string()))
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/tasks",
        get(list_tasks)
            .post(create_task)
            .patch(toggle_task)
            .delete(delete_task),
    )
}
