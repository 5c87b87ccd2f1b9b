//! User plant entity model.

use serde::Serialize;
use spriggly_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `user_plants` table: one planted seed instance.
///
/// XP is the source of truth; `level` is always re-derived from XP against
/// the template's stage thresholds whenever XP changes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPlant {
    pub id: DbId,
    pub user_id: DbId,
    pub plant_template_id: DbId,
    pub level: i32,
    pub xp: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
