//! Booster use: consume inventory, transform a plant's XP, re-derive level.

use serde::{Deserialize, Serialize};
use spriggly_core::error::CoreError;
use spriggly_core::growth;
use spriggly_core::types::DbId;
use spriggly_db::models::inventory::BoosterInventory;
use spriggly_db::models::plant::UserPlant;
use spriggly_db::repositories::{BoosterInventoryRepo, PlantRepo, TemplateRepo, UserRepo};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request payload for using a booster on a plant.
#[derive(Debug, Deserialize)]
pub struct UseBooster {
    pub booster_template_id: DbId,
}

/// Result of using a booster.
#[derive(Debug, Serialize)]
pub struct BoosterUseOutcome {
    pub plant: UserPlant,
    pub boosters: Vec<BoosterInventory>,
}

/// Apply one booster from the caller's inventory to one of their plants.
///
/// The inventory decrement, the XP transform, and the level re-derivation
/// commit together or not at all. Holding no stock of the booster is a
/// validation error, not a not-found: the template may exist, the caller
/// just doesn't own any.
pub async fn use_booster(
    state: &AppState,
    user_id: DbId,
    plant_id: DbId,
    input: UseBooster,
) -> AppResult<BoosterUseOutcome> {
    let _guard = state.user_locks.acquire(user_id).await;
    let mut tx = state.pool.begin().await?;

    let user = UserRepo::find_for_update(&mut tx, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    BoosterInventoryRepo::consume_one(&mut tx, user.id, input.booster_template_id)
        .await?
        .ok_or_else(|| CoreError::Validation("No boosters of this type in inventory".into()))?;

    let booster = TemplateRepo::find_booster(&mut tx, input.booster_template_id)
        .await?
        .ok_or_else(|| CoreError::Validation("Unknown booster template".into()))?;

    let plant = PlantRepo::find_for_update(&mut tx, plant_id, user.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "plant",
            id: plant_id,
        })?;

    let plant_template = TemplateRepo::find_plant(&mut tx, plant.plant_template_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "plant {} references a missing template {}",
                plant.id, plant.plant_template_id
            ))
        })?;

    let thresholds = plant_template.thresholds();
    let (xp, level) = growth::apply_booster(&booster.effect, plant.xp, &thresholds)?;

    let plant = PlantRepo::update_growth(&mut tx, plant.id, xp, level).await?;
    let boosters = BoosterInventoryRepo::list_for_user_tx(&mut tx, user.id).await?;

    tx.commit().await?;

    info!(
        user_id,
        plant_id,
        booster = %booster.effect,
        xp,
        level,
        "booster applied"
    );

    Ok(BoosterUseOutcome { plant, boosters })
}
