//! Per-user counted inventory rows for seeds and boosters.
//!
//! Invariant: a row exists iff its quantity > 0. Consumption that would
//! leave zero deletes the row; grants upsert.

use serde::Serialize;
use spriggly_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `seed_inventory` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeedInventory {
    pub id: DbId,
    pub user_id: DbId,
    pub plant_template_id: DbId,
    pub quantity: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `booster_inventory` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoosterInventory {
    pub id: DbId,
    pub user_id: DbId,
    pub booster_template_id: DbId,
    pub quantity: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
