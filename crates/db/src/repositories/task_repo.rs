//! Repository for the `tasks` table.

use sqlx::{PgPool, Postgres, Transaction};
use spriggly_core::types::{DbId, Timestamp};

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, priority, due_date, completed_at, \
                       earned_xp, earned_coins, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task for a user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (user_id, name, description, priority, due_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.priority.as_str())
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// List a user's tasks, most recently created first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a task by id, scoped to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a not-yet-completed task. Only non-`None` fields are applied.
    ///
    /// Returns `None` when the task does not exist for this user or is
    /// already completed (completed tasks are immutable).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                priority = COALESCE($5, priority),
                due_date = COALESCE($6, due_date),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2 AND completed_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.priority.map(|p| p.as_str()))
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a not-yet-completed task. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM tasks WHERE id = $1 AND user_id = $2 AND completed_at IS NULL",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the task targeted by a completion request, locked for the
    /// transaction. Only pending (not yet completed) tasks match.
    pub async fn find_pending_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE id = $1 AND user_id = $2 AND completed_at IS NULL
             FOR UPDATE"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Mark a task complete exactly once, fixing its earned rewards.
    ///
    /// The `completed_at IS NULL` guard makes completion idempotent at the
    /// statement level; `None` means the task was already completed.
    pub async fn complete(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        completed_at: Timestamp,
        earned_xp: i64,
        earned_coins: i64,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                completed_at = $2,
                earned_xp = $3,
                earned_coins = $4,
                updated_at = NOW()
             WHERE id = $1 AND completed_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(completed_at)
            .bind(earned_xp)
            .bind(earned_coins)
            .fetch_optional(&mut **tx)
            .await
    }
}
