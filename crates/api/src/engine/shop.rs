//! Shop purchases: server-side pricing, conditional debit, inventory credit.

use serde::{Deserialize, Serialize};
use spriggly_core::error::CoreError;
use spriggly_core::types::DbId;
use spriggly_db::repositories::{BoosterInventoryRepo, SeedInventoryRepo, TemplateRepo, UserRepo};
use tracing::info;

use crate::error::AppResult;
use crate::state::AppState;

/// Purchasable item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Booster,
    Seed,
}

/// Request payload for a shop purchase.
///
/// Carries no price: the charge is always derived from the catalog row, so
/// a tampered client cannot buy below list.
#[derive(Debug, Deserialize)]
pub struct Purchase {
    pub item_type: ItemType,
    pub template_id: DbId,
}

/// Result of a shop purchase.
#[derive(Debug, Serialize)]
pub struct PurchaseOutcome {
    pub item_type: ItemType,
    pub template_id: DbId,
    pub price: i64,
    /// Coin balance after the debit.
    pub coins: i64,
}

/// Buy one booster or one seed from the shop.
///
/// The coin check and debit are a single conditional UPDATE, so two
/// concurrent purchases cannot both spend the same coins even without the
/// per-user lock.
pub async fn purchase(
    state: &AppState,
    user_id: DbId,
    input: Purchase,
) -> AppResult<PurchaseOutcome> {
    let _guard = state.user_locks.acquire(user_id).await;
    let mut tx = state.pool.begin().await?;

    let user = UserRepo::find_for_update(&mut tx, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    let price = match input.item_type {
        ItemType::Booster => {
            TemplateRepo::find_booster(&mut tx, input.template_id)
                .await?
                .ok_or_else(|| CoreError::Validation("Unknown booster template".into()))?
                .price
        }
        ItemType::Seed => {
            TemplateRepo::find_plant(&mut tx, input.template_id)
                .await?
                .ok_or_else(|| CoreError::Validation("Unknown plant template".into()))?
                .seed_price
        }
    };

    let coins = UserRepo::debit_purchase(&mut tx, user.id, price)
        .await?
        .ok_or_else(|| CoreError::Validation("Insufficient coins".into()))?;

    match input.item_type {
        ItemType::Booster => {
            BoosterInventoryRepo::add(&mut tx, user.id, input.template_id, 1).await?;
        }
        ItemType::Seed => {
            SeedInventoryRepo::add(&mut tx, user.id, input.template_id, 1).await?;
        }
    }

    tx.commit().await?;

    info!(
        user_id,
        item_type = ?input.item_type,
        template_id = input.template_id,
        price,
        "shop purchase"
    );

    Ok(PurchaseOutcome {
        item_type: input.item_type,
        template_id: input.template_id,
        price,
        coins,
    })
}
