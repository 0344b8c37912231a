//! Request handlers for `/tasks` routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::{ApiError, AppState};
use crate::task::domain::{Task, TaskDraft, TaskId};

/// `GET /tasks`
pub(super) async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.service().list_tasks().await?;
    Ok(Json(tasks))
}

/// `GET /tasks/{id}`
pub(super) async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    let task = state.service().get_task(id).await?;
    Ok(Json(task))
}

/// `POST /tasks`
pub(super) async fn create_task(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.service().create_task(draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}`
pub(super) async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, ApiError> {
    let task = state.service().update_task(id, draft).await?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
pub(super) async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    state.service().delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /tasks/{id}` marks the task done.
pub(super) async fn mark_done(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    state.service().mark_done(id).await?;
    Ok(StatusCode::OK)
}
