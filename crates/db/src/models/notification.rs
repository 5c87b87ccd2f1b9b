//! Notification entity model.

use serde::Serialize;
use spriggly_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// Written by triggers outside the reward engine (reminders, announcements)
/// and read by the UI.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
