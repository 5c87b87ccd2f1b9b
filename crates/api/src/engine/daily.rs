//! Daily reward claim: streak continuity, the 7-day cycle, and bundle grants.

use chrono::Utc;
use serde::Serialize;
use spriggly_core::error::CoreError;
use spriggly_core::streak;
use spriggly_core::types::DbId;
use spriggly_db::models::inventory::{BoosterInventory, SeedInventory};
use spriggly_db::models::user::UserResponse;
use spriggly_db::repositories::{BoosterInventoryRepo, SeedInventoryRepo, TemplateRepo, UserRepo};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Date key format stored in `users.claimed_days`.
const CLAIMED_DAY_FORMAT: &str = "%Y-%m-%d";

/// An item bundle granted alongside the coin reward.
#[derive(Debug, Serialize)]
pub struct ItemGrant {
    pub template_id: DbId,
    pub quantity: i64,
}

/// Result of claiming the daily reward.
#[derive(Debug, Serialize)]
pub struct DailyClaimOutcome {
    /// Cycle day (1-7) that was claimed.
    pub day: i32,
    pub coins: i64,
    pub booster: Option<ItemGrant>,
    pub seed: Option<ItemGrant>,
    /// True when a missed day sent the cycle back to day 1.
    pub streak_reset: bool,
    pub user: UserResponse,
    pub boosters: Vec<BoosterInventory>,
    pub seeds: Vec<SeedInventory>,
}

/// Claim today's daily reward.
///
/// Idempotent per calendar day: a second claim on the same day is rejected
/// before anything is granted. Claiming on consecutive days advances the
/// 7-day cycle (day 7 wraps to day 1); a gap resets to day 1. A missing
/// reward template for the resolved day is a catalog configuration bug and
/// surfaces as an internal error.
pub async fn claim_daily_reward(state: &AppState, user_id: DbId) -> AppResult<DailyClaimOutcome> {
    let _guard = state.user_locks.acquire(user_id).await;
    let mut tx = state.pool.begin().await?;

    let user = UserRepo::find_for_update(&mut tx, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    let now = Utc::now();
    let today = now.date_naive();
    let today_key = today.format(CLAIMED_DAY_FORMAT).to_string();

    if user.claimed_days.contains(&today_key) {
        return Err(CoreError::Validation("Daily reward already claimed today".into()).into());
    }

    let advance = streak::advance(
        user.daily_streak_day,
        user.last_claimed_date.map(|t| t.date_naive()),
        today,
        user.last_claimed_date.is_some(),
    );

    let template = TemplateRepo::find_daily_reward(&mut tx, advance.day)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "no daily reward template configured for day {}",
                advance.day
            ))
        })?;

    // Day 1 starts a fresh cycle (whether by reset or by wrapping from
    // day 7), so the claimed-day checklist restarts with it.
    let claimed_days = if advance.day == 1 {
        vec![today_key]
    } else {
        let mut days = user.claimed_days.clone();
        days.push(today_key);
        days
    };

    let current_streak = if advance.continued {
        user.current_streak + 1
    } else {
        1
    };
    let longest_streak = user.longest_streak.max(current_streak);

    let user = UserRepo::apply_daily_claim(
        &mut tx,
        user.id,
        template.coins,
        advance.day,
        &claimed_days,
        current_streak,
        longest_streak,
        now,
    )
    .await?;

    let booster = match template.booster_template_id {
        Some(template_id) => {
            let quantity = template.booster_quantity.unwrap_or(1);
            BoosterInventoryRepo::add(&mut tx, user.id, template_id, quantity).await?;
            Some(ItemGrant {
                template_id,
                quantity,
            })
        }
        None => None,
    };
    let seed = match template.seed_template_id {
        Some(template_id) => {
            let quantity = template.seed_quantity.unwrap_or(1);
            SeedInventoryRepo::add(&mut tx, user.id, template_id, quantity).await?;
            Some(ItemGrant {
                template_id,
                quantity,
            })
        }
        None => None,
    };

    let boosters = BoosterInventoryRepo::list_for_user_tx(&mut tx, user.id).await?;
    let seeds = SeedInventoryRepo::list_for_user_tx(&mut tx, user.id).await?;

    tx.commit().await?;

    info!(
        user_id,
        day = advance.day,
        coins = template.coins,
        reset = advance.reset,
        "daily reward claimed"
    );

    Ok(DailyClaimOutcome {
        day: advance.day,
        coins: template.coins,
        booster,
        seed,
        streak_reset: advance.reset,
        user: user.into(),
        boosters,
        seeds,
    })
}
