//! Repositories for the `seed_inventory` and `booster_inventory` tables.
//!
//! Both tables share the invariant that a row exists iff quantity > 0:
//! grants upsert (`ON CONFLICT ... DO UPDATE`), and consuming the last unit
//! deletes the row rather than leaving it at zero.

use sqlx::{PgPool, Postgres, Transaction};
use spriggly_core::types::DbId;

use crate::models::inventory::{BoosterInventory, SeedInventory};

const SEED_COLUMNS: &str = "id, user_id, plant_template_id, quantity, created_at, updated_at";
const BOOSTER_COLUMNS: &str = "id, user_id, booster_template_id, quantity, created_at, updated_at";

/// Provides stock operations for seed inventory.
pub struct SeedInventoryRepo;

impl SeedInventoryRepo {
    /// List a user's seed stock.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SeedInventory>, sqlx::Error> {
        let query = format!(
            "SELECT {SEED_COLUMNS} FROM seed_inventory WHERE user_id = $1
             ORDER BY plant_template_id"
        );
        sqlx::query_as::<_, SeedInventory>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's seed stock inside a transaction.
    pub async fn list_for_user_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
    ) -> Result<Vec<SeedInventory>, sqlx::Error> {
        let query = format!(
            "SELECT {SEED_COLUMNS} FROM seed_inventory WHERE user_id = $1
             ORDER BY plant_template_id"
        );
        sqlx::query_as::<_, SeedInventory>(&query)
            .bind(user_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Add `quantity` units, inserting the row or incrementing an existing one.
    pub async fn add(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        plant_template_id: DbId,
        quantity: i64,
    ) -> Result<SeedInventory, sqlx::Error> {
        let query = format!(
            "INSERT INTO seed_inventory (user_id, plant_template_id, quantity)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, plant_template_id)
             DO UPDATE SET quantity = seed_inventory.quantity + EXCLUDED.quantity,
                           updated_at = NOW()
             RETURNING {SEED_COLUMNS}"
        );
        sqlx::query_as::<_, SeedInventory>(&query)
            .bind(user_id)
            .bind(plant_template_id)
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await
    }

    /// Consume one unit. Deletes the row when the last unit is consumed.
    ///
    /// Returns the remaining quantity (0 = row deleted), or `None` when the
    /// user holds no stock of this template.
    pub async fn consume_one(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        plant_template_id: DbId,
    ) -> Result<Option<i64>, sqlx::Error> {
        let current: Option<i64> = sqlx::query_scalar(
            "SELECT quantity FROM seed_inventory
             WHERE user_id = $1 AND plant_template_id = $2
             FOR UPDATE",
        )
        .bind(user_id)
        .bind(plant_template_id)
        .fetch_optional(&mut **tx)
        .await?;

        let Some(quantity) = current else {
            return Ok(None);
        };

        if quantity <= 1 {
            sqlx::query(
                "DELETE FROM seed_inventory WHERE user_id = $1 AND plant_template_id = $2",
            )
            .bind(user_id)
            .bind(plant_template_id)
            .execute(&mut **tx)
            .await?;
            Ok(Some(0))
        } else {
            sqlx::query(
                "UPDATE seed_inventory SET quantity = quantity - 1, updated_at = NOW()
                 WHERE user_id = $1 AND plant_template_id = $2",
            )
            .bind(user_id)
            .bind(plant_template_id)
            .execute(&mut **tx)
            .await?;
            Ok(Some(quantity - 1))
        }
    }
}

/// Provides stock operations for booster inventory.
pub struct BoosterInventoryRepo;

impl BoosterInventoryRepo {
    /// List a user's booster stock.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BoosterInventory>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOSTER_COLUMNS} FROM booster_inventory WHERE user_id = $1
             ORDER BY booster_template_id"
        );
        sqlx::query_as::<_, BoosterInventory>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's booster stock inside a transaction.
    pub async fn list_for_user_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
    ) -> Result<Vec<BoosterInventory>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOSTER_COLUMNS} FROM booster_inventory WHERE user_id = $1
             ORDER BY booster_template_id"
        );
        sqlx::query_as::<_, BoosterInventory>(&query)
            .bind(user_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Add `quantity` units, inserting the row or incrementing an existing one.
    pub async fn add(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        booster_template_id: DbId,
        quantity: i64,
    ) -> Result<BoosterInventory, sqlx::Error> {
        let query = format!(
            "INSERT INTO booster_inventory (user_id, booster_template_id, quantity)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, booster_template_id)
             DO UPDATE SET quantity = booster_inventory.quantity + EXCLUDED.quantity,
                           updated_at = NOW()
             RETURNING {BOOSTER_COLUMNS}"
        );
        sqlx::query_as::<_, BoosterInventory>(&query)
            .bind(user_id)
            .bind(booster_template_id)
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await
    }

    /// Consume one unit. Deletes the row when the last unit is consumed.
    ///
    /// Returns the remaining quantity (0 = row deleted), or `None` when the
    /// user holds no stock of this template.
    pub async fn consume_one(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        booster_template_id: DbId,
    ) -> Result<Option<i64>, sqlx::Error> {
        let current: Option<i64> = sqlx::query_scalar(
            "SELECT quantity FROM booster_inventory
             WHERE user_id = $1 AND booster_template_id = $2
             FOR UPDATE",
        )
        .bind(user_id)
        .bind(booster_template_id)
        .fetch_optional(&mut **tx)
        .await?;

        let Some(quantity) = current else {
            return Ok(None);
        };

        if quantity <= 1 {
            sqlx::query(
                "DELETE FROM booster_inventory WHERE user_id = $1 AND booster_template_id = $2",
            )
            .bind(user_id)
            .bind(booster_template_id)
            .execute(&mut **tx)
            .await?;
            Ok(Some(0))
        } else {
            sqlx::query(
                "UPDATE booster_inventory SET quantity = quantity - 1, updated_at = NOW()
                 WHERE user_id = $1 AND booster_template_id = $2",
            )
            .bind(user_id)
            .bind(booster_template_id)
            .execute(&mut **tx)
            .await?;
            Ok(Some(quantity - 1))
        }
    }
}
