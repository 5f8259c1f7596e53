use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{
    task_dto::{CreateTaskRequest, TaskFilters, UpdateTaskRequest},
    task_models::Task,
};
use crate::{
    error::{AppError, Result},
    state::AppState,
};

/// Get all tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskFilters),
    responses((status = 200, description = "List of tasks", body = Vec<Task>)),
    tag = "tasks"
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    Query(filters): Query<TaskFilters>,
) -> Json<Vec<Task>> {
    Json(state.task_service.list_tasks(filters).await)
}

/// Get a single task
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task", body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>> {
    let task = state.task_service.get_task(&task_id).await?;
    Ok(Json(task))
}

/// Create a task
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Invalid payload")
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse> {
    let task = state.task_service.create_task(payload).await?;
    tracing::debug!("Created task {} with reminder {}", task.id, task.reminder);

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task ID")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Task>> {
    let task = state.task_service.update_task(&task_id, payload).await?;
    Ok(Json(task))
}

/// Flip a task between open and completed
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}/toggle",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task toggled", body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>> {
    let task = state.task_service.toggle_completed(&task_id).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode> {
    let rows_affected = state.task_service.delete_task(&task_id).await;

    if rows_affected == 0 {
        return Err(AppError::NotFound("Task not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
