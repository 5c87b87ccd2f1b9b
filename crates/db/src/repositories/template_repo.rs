//! Repository for the read-only catalog tables.

use sqlx::{PgPool, Postgres, Transaction};
use spriggly_core::types::DbId;

use crate::models::template::{BoosterTemplate, DailyRewardTemplate, PlantTemplate};

const PLANT_COLUMNS: &str = "id, name, description, sprout_xp, sapling_xp, mature_xp, \
                             blooming_xp, seed_price, created_at";
const BOOSTER_COLUMNS: &str = "id, name, description, effect, price, created_at";
const DAILY_COLUMNS: &str = "id, day, coins, booster_template_id, booster_quantity, \
                             seed_template_id, seed_quantity";

/// Read access to catalog templates. Templates are seeded by migration and
/// never mutated at runtime.
pub struct TemplateRepo;

impl TemplateRepo {
    /// List all plant templates.
    pub async fn list_plants(pool: &PgPool) -> Result<Vec<PlantTemplate>, sqlx::Error> {
        let query = format!("SELECT {PLANT_COLUMNS} FROM plant_templates ORDER BY id");
        sqlx::query_as::<_, PlantTemplate>(&query).fetch_all(pool).await
    }

    /// List all booster templates.
    pub async fn list_boosters(pool: &PgPool) -> Result<Vec<BoosterTemplate>, sqlx::Error> {
        let query = format!("SELECT {BOOSTER_COLUMNS} FROM booster_templates ORDER BY id");
        sqlx::query_as::<_, BoosterTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a plant template by id (transactional; catalog reads inside
    /// engine operations stay on the operation's connection).
    pub async fn find_plant(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<PlantTemplate>, sqlx::Error> {
        let query = format!("SELECT {PLANT_COLUMNS} FROM plant_templates WHERE id = $1");
        sqlx::query_as::<_, PlantTemplate>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Find a booster template by id.
    pub async fn find_booster(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<BoosterTemplate>, sqlx::Error> {
        let query = format!("SELECT {BOOSTER_COLUMNS} FROM booster_templates WHERE id = $1");
        sqlx::query_as::<_, BoosterTemplate>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Find the daily reward template for a cycle day (1-7).
    ///
    /// Absence is a content/configuration bug; the engine surfaces it as an
    /// internal error, not a user error.
    pub async fn find_daily_reward(
        tx: &mut Transaction<'_, Postgres>,
        day: i32,
    ) -> Result<Option<DailyRewardTemplate>, sqlx::Error> {
        let query = format!("SELECT {DAILY_COLUMNS} FROM daily_reward_templates WHERE day = $1");
        sqlx::query_as::<_, DailyRewardTemplate>(&query)
            .bind(day)
            .fetch_optional(&mut **tx)
            .await
    }
}
