//! Seed planting: consume one seed, create the plant, update collection stats.

use serde::{Deserialize, Serialize};
use spriggly_core::error::CoreError;
use spriggly_core::types::DbId;
use spriggly_db::models::inventory::SeedInventory;
use spriggly_db::models::plant::UserPlant;
use spriggly_db::repositories::{PlantRepo, SeedInventoryRepo, TemplateRepo, UserRepo};
use tracing::info;

use crate::error::AppResult;
use crate::state::AppState;

/// Request payload for planting a seed.
#[derive(Debug, Deserialize)]
pub struct PlantSeed {
    pub plant_template_id: DbId,
}

/// Result of planting a seed.
#[derive(Debug, Serialize)]
pub struct PlantSeedOutcome {
    pub plant: UserPlant,
    pub plants: Vec<UserPlant>,
    pub seeds: Vec<SeedInventory>,
}

/// Plant one seed from the caller's inventory.
///
/// The new plant starts at level 1 with 0 XP. The seed decrement and the
/// plant creation commit together, so a failure leaves the inventory intact.
pub async fn plant_seed(
    state: &AppState,
    user_id: DbId,
    input: PlantSeed,
) -> AppResult<PlantSeedOutcome> {
    let _guard = state.user_locks.acquire(user_id).await;
    let mut tx = state.pool.begin().await?;

    let user = UserRepo::find_for_update(&mut tx, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    TemplateRepo::find_plant(&mut tx, input.plant_template_id)
        .await?
        .ok_or_else(|| CoreError::Validation("Unknown plant template".into()))?;

    SeedInventoryRepo::consume_one(&mut tx, user.id, input.plant_template_id)
        .await?
        .ok_or_else(|| CoreError::Validation("No seeds of this type in inventory".into()))?;

    let plant = PlantRepo::create(&mut tx, user.id, input.plant_template_id).await?;
    UserRepo::increment_plants_collected(&mut tx, user.id).await?;

    let plants = PlantRepo::list_for_user_tx(&mut tx, user.id).await?;
    let seeds = SeedInventoryRepo::list_for_user_tx(&mut tx, user.id).await?;

    tx.commit().await?;

    info!(
        user_id,
        plant_id = plant.id,
        template_id = input.plant_template_id,
        "seed planted"
    );

    Ok(PlantSeedOutcome {
        plant,
        plants,
        seeds,
    })
}
