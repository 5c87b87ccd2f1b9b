//! Focus session completion: record the finalized session and credit rewards.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use spriggly_core::error::CoreError;
use spriggly_core::rewards;
use spriggly_core::types::DbId;
use spriggly_db::models::focus_session::FocusSession;
use spriggly_db::models::user::UserResponse;
use spriggly_db::repositories::{FocusSessionRepo, UserRepo};
use tracing::info;

use crate::error::AppResult;
use crate::state::AppState;

/// Longest session a client may report, in minutes (24 hours).
const MAX_SESSION_MINUTES: i64 = 24 * 60;

/// Request payload for finalizing a focus session.
#[derive(Debug, Deserialize)]
pub struct CompleteFocusSession {
    pub duration_minutes: i64,
    #[serde(default)]
    pub surrendered: bool,
}

/// Result of finalizing a focus session.
#[derive(Debug, Serialize)]
pub struct FocusCompletionOutcome {
    pub session: FocusSession,
    pub earned_xp: i64,
    pub earned_coins: i64,
    pub user: UserResponse,
}

/// Finalize a focus session.
///
/// Sessions are append-only: the row is created fully finalized and never
/// updated. Surrendered sessions record the duration but earn nothing and
/// contribute no focus hours.
pub async fn complete_focus_session(
    state: &AppState,
    user_id: DbId,
    input: CompleteFocusSession,
) -> AppResult<FocusCompletionOutcome> {
    if input.duration_minutes <= 0 {
        return Err(
            CoreError::Validation("Session duration must be at least one minute".into()).into(),
        );
    }
    if input.duration_minutes > MAX_SESSION_MINUTES {
        return Err(CoreError::Validation(format!(
            "Session duration cannot exceed {MAX_SESSION_MINUTES} minutes"
        ))
        .into());
    }

    let _guard = state.user_locks.acquire(user_id).await;
    let mut tx = state.pool.begin().await?;

    let user = UserRepo::find_for_update(&mut tx, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    let reward = rewards::focus_reward(input.duration_minutes, input.surrendered);
    let now = Utc::now();

    let session = FocusSessionRepo::create(
        &mut tx,
        user.id,
        input.duration_minutes,
        input.surrendered,
        reward.xp,
        reward.coins,
        now,
    )
    .await?;
    let user =
        UserRepo::apply_focus_completion(&mut tx, user.id, reward.xp, reward.coins, reward.hours)
            .await?;

    tx.commit().await?;

    info!(
        user_id,
        minutes = input.duration_minutes,
        surrendered = input.surrendered,
        xp = reward.xp,
        "focus session recorded"
    );

    Ok(FocusCompletionOutcome {
        session,
        earned_xp: reward.xp,
        earned_coins: reward.coins,
        user: user.into(),
    })
}
