//! Read-only catalog entities: plant, booster, and daily reward templates.
//!
//! Seeded by migration; never mutated by the engine.

use serde::Serialize;
use spriggly_core::growth::StageThresholds;
use spriggly_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `plant_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlantTemplate {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub sprout_xp: i64,
    pub sapling_xp: i64,
    pub mature_xp: i64,
    pub blooming_xp: i64,
    /// Authoritative seed price; clients never supply prices.
    pub seed_price: i64,
    pub created_at: Timestamp,
}

impl PlantTemplate {
    /// The template's growth thresholds as a core type.
    pub fn thresholds(&self) -> StageThresholds {
        StageThresholds {
            sprout: self.sprout_xp,
            sapling: self.sapling_xp,
            mature: self.mature_xp,
            blooming: self.blooming_xp,
        }
    }
}

/// A row from the `booster_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoosterTemplate {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Effect string understood by `spriggly_core::growth::apply_booster`.
    pub effect: String,
    /// Authoritative price; clients never supply prices.
    pub price: i64,
    pub created_at: Timestamp,
}

/// A row from the `daily_reward_templates` table, keyed by cycle day 1-7.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyRewardTemplate {
    pub id: DbId,
    pub day: i32,
    pub coins: i64,
    pub booster_template_id: Option<DbId>,
    pub booster_quantity: Option<i64>,
    pub seed_template_id: Option<DbId>,
    pub seed_quantity: Option<i64>,
}
