use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{error::Result, state::AppState};
use super::{
    task_dto::{CreateTaskRequest, MessageResponse, TaskListResponse, UpdateTaskRequest},
    task_models::Task,
};

/// List every task
#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "List of tasks", body = TaskListResponse),
        (status = 500, description = "Storage error")
    ),
    tag = "tasks"
)]
pub async fn get_tasks(State(state): State<AppState>) -> Result<Json<TaskListResponse>> {
    let tasks = state.task_service.list_tasks().await?;
    Ok(Json(TaskListResponse { tasks }))
}

#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task", body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<Task>> {
    let task = state.task_service.get_task(task_id).await?;
    Ok(Json(task))
}

/// Create a task. It always starts incomplete.
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Missing or invalid title")
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse> {
    let task = state.task_service.create_task(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Overwrite the fields present in the body, leaving the rest as they were
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = MessageResponse),
        (status = 400, description = "Invalid title"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<MessageResponse>> {
    state.task_service.update_task(task_id, payload).await?;
    Ok(Json(MessageResponse::new("Task updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    state.task_service.delete_task(task_id).await?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

#[utoipa::path(
    put,
    path = "/tasks/{id}/toggle",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Completion flipped", body = MessageResponse),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    state.task_service.toggle_task(task_id).await?;
    Ok(Json(MessageResponse::new("Task toggled successfully")))
}

/// Delete every completed task
#[utoipa::path(
    delete,
    path = "/tasks/clear",
    responses(
        (status = 200, description = "Completed tasks removed", body = MessageResponse),
        (status = 500, description = "Storage error")
    ),
    tag = "tasks"
)]
pub async fn clear_completed_tasks(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    state.task_service.clear_completed().await?;
    Ok(Json(MessageResponse::new("Completed tasks cleared successfully")))
}
