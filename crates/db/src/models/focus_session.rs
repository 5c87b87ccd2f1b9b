//! Focus session entity model.

use serde::Serialize;
use spriggly_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `focus_sessions` table.
///
/// Created and finalized atomically at session end; immutable thereafter.
/// Surrendered sessions carry zero rewards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FocusSession {
    pub id: DbId,
    pub user_id: DbId,
    pub duration_minutes: i64,
    pub surrendered: bool,
    pub earned_xp: i64,
    pub earned_coins: i64,
    pub completed_at: Timestamp,
    pub created_at: Timestamp,
}
