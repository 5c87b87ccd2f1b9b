//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use spriggly_core::rewards::TaskPriority;
use spriggly_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `tasks` table.
///
/// `earned_xp` / `earned_coins` stay zero until `completed_at` is set, then
/// are fixed forever; a completed task is immutable.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub earned_xp: i64,
    pub earned_coins: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub name: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating a not-yet-completed task. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Timestamp>,
}
