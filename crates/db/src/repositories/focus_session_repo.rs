//! Repository for the `focus_sessions` table.

use sqlx::{PgPool, Postgres, Transaction};
use spriggly_core::types::{DbId, Timestamp};

use crate::models::focus_session::FocusSession;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, duration_minutes, surrendered, earned_xp, earned_coins, \
                       completed_at, created_at";

/// Provides operations for focus sessions. Sessions are append-only:
/// created fully finalized, never updated.
pub struct FocusSessionRepo;

impl FocusSessionRepo {
    /// Insert a finalized session, returning the created row.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        duration_minutes: i64,
        surrendered: bool,
        earned_xp: i64,
        earned_coins: i64,
        completed_at: Timestamp,
    ) -> Result<FocusSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO focus_sessions
                (user_id, duration_minutes, surrendered, earned_xp, earned_coins, completed_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FocusSession>(&query)
            .bind(user_id)
            .bind(duration_minutes)
            .bind(surrendered)
            .bind(earned_xp)
            .bind(earned_coins)
            .bind(completed_at)
            .fetch_one(&mut **tx)
            .await
    }

    /// List a user's sessions, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FocusSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM focus_sessions
             WHERE user_id = $1
             ORDER BY completed_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, FocusSession>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
