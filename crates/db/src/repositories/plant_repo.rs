//! Repository for the `user_plants` table.

use sqlx::{PgPool, Postgres, Transaction};
use spriggly_core::types::DbId;

use crate::models::plant::UserPlant;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, plant_template_id, level, xp, created_at, updated_at";

/// Provides operations for planted plant instances.
pub struct PlantRepo;

impl PlantRepo {
    /// Create a new plant at level 1 / 0 XP (a seed was planted).
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        plant_template_id: DbId,
    ) -> Result<UserPlant, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_plants (user_id, plant_template_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPlant>(&query)
            .bind(user_id)
            .bind(plant_template_id)
            .fetch_one(&mut **tx)
            .await
    }

    /// List a user's plants, oldest first (planting order).
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserPlant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_plants WHERE user_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, UserPlant>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's plants inside a transaction (for post-mutation reads).
    pub async fn list_for_user_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
    ) -> Result<Vec<UserPlant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_plants WHERE user_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, UserPlant>(&query)
            .bind(user_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Fetch a plant by id locked for the transaction, scoped to its owner.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<UserPlant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_plants WHERE id = $1 AND user_id = $2 FOR UPDATE"
        );
        sqlx::query_as::<_, UserPlant>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Persist a booster's outcome: the transformed XP and re-derived level.
    pub async fn update_growth(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        xp: i64,
        level: i32,
    ) -> Result<UserPlant, sqlx::Error> {
        let query = format!(
            "UPDATE user_plants SET xp = $2, level = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPlant>(&query)
            .bind(id)
            .bind(xp)
            .bind(level)
            .fetch_one(&mut **tx)
            .await
    }
}
