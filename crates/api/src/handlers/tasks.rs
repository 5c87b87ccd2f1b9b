//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spriggly_core::error::CoreError;
use spriggly_core::types::DbId;
use spriggly_db::models::task::{CreateTask, Task, UpdateTask};
use spriggly_db::repositories::TaskRepo;

use crate::engine::tasks::{complete_task, TaskCompletionOutcome};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tasks
///
/// List the authenticated user's tasks, most recently created first.
pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = TaskRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// POST /api/v1/tasks
///
/// Create a task. Rewards stay zero until completion fixes them.
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Task name cannot be empty".into(),
        )));
    }

    let task = TaskRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task = TaskRepo::find_for_user(&state.pool, task_id, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "task",
            id: task_id,
        })?;
    Ok(Json(DataResponse { data: task }))
}

/// PUT /api/v1/tasks/{id}
///
/// Update a not-yet-completed task. Completed tasks are immutable, so they
/// report not-found here.
pub async fn update_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<DataResponse<Task>>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Task name cannot be empty".into(),
            )));
        }
    }

    let task = TaskRepo::update(&state.pool, task_id, auth.user_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "task",
            id: task_id,
        })?;
    Ok(Json(DataResponse { data: task }))
}

/// DELETE /api/v1/tasks/{id}
///
/// Delete a not-yet-completed task. Returns 204 No Content.
pub async fn delete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, task_id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "task",
            id: task_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/tasks/{id}/complete
///
/// Complete a task and credit its rewards through the engine.
pub async fn complete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<DataResponse<TaskCompletionOutcome>>> {
    let outcome = complete_task(&state, auth.user_id, task_id).await?;
    Ok(Json(DataResponse { data: outcome }))
}
