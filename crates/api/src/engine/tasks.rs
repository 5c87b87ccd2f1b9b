//! Task completion: fix the payout, mark the task done, credit the user.

use chrono::Utc;
use serde::Serialize;
use spriggly_core::error::CoreError;
use spriggly_core::rewards::{self, TaskPriority};
use spriggly_core::types::DbId;
use spriggly_db::models::task::Task;
use spriggly_db::models::user::UserResponse;
use spriggly_db::repositories::{TaskRepo, UserRepo};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of completing a task.
#[derive(Debug, Serialize)]
pub struct TaskCompletionOutcome {
    pub task: Task,
    pub earned_xp: i64,
    pub earned_coins: i64,
    pub past_deadline: bool,
    pub user: UserResponse,
}

/// Complete a pending task and credit its rewards.
///
/// Completion strictly after the due date halves the payout; the earned
/// amounts are written onto the task row and never change afterwards.
/// A task that is missing, owned by someone else, or already completed
/// reports not-found.
pub async fn complete_task(
    state: &AppState,
    user_id: DbId,
    task_id: DbId,
) -> AppResult<TaskCompletionOutcome> {
    let _guard = state.user_locks.acquire(user_id).await;
    let mut tx = state.pool.begin().await?;

    let user = UserRepo::find_for_update(&mut tx, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    let task = TaskRepo::find_pending_for_update(&mut tx, task_id, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "task",
            id: task_id,
        })?;

    let priority = TaskPriority::parse(&task.priority).ok_or_else(|| {
        AppError::InternalError(format!(
            "task {} carries an invalid priority '{}'",
            task.id, task.priority
        ))
    })?;

    let now = Utc::now();
    let reward = rewards::task_reward(priority, now, task.due_date);

    let task = TaskRepo::complete(&mut tx, task.id, now, reward.xp, reward.coins)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "task",
            id: task_id,
        })?;
    let user = UserRepo::apply_task_completion(&mut tx, user.id, reward.xp, reward.coins).await?;

    tx.commit().await?;

    info!(
        user_id,
        task_id,
        xp = reward.xp,
        coins = reward.coins,
        past_deadline = reward.past_deadline,
        "task completed"
    );

    Ok(TaskCompletionOutcome {
        task,
        earned_xp: reward.xp,
        earned_coins: reward.coins,
        past_deadline: reward.past_deadline,
        user: user.into(),
    })
}
