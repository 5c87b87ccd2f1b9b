//! Handlers for the `/daily-rewards` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use spriggly_core::error::CoreError;
use spriggly_core::streak;
use spriggly_db::repositories::UserRepo;

use crate::engine::daily::{claim_daily_reward, DailyClaimOutcome};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /daily-rewards/status`.
#[derive(Debug, Serialize)]
pub struct DailyStatus {
    /// Last claimed cycle day (0 = never claimed).
    pub day: i32,
    /// Cycle day the next claim will land on: today's pending claim, or
    /// tomorrow's continuation if today is already claimed.
    pub next_day: i32,
    pub claimed_today: bool,
    /// Dates (YYYY-MM-DD) claimed in the current cycle.
    pub claimed_days: Vec<String>,
    pub current_streak: i32,
    pub longest_streak: i32,
}

/// GET /api/v1/daily-rewards/status
///
/// Report where the caller stands in the 7-day cycle without mutating
/// anything, so the UI can render the claim screen.
pub async fn status(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DailyStatus>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: auth.user_id,
        })?;

    let today = Utc::now().date_naive();
    let claimed_today = user
        .claimed_days
        .contains(&today.format("%Y-%m-%d").to_string());

    let advance = streak::advance(
        user.daily_streak_day,
        user.last_claimed_date.map(|t| t.date_naive()),
        today,
        user.last_claimed_date.is_some(),
    );
    let next_day = next_claim_day(user.daily_streak_day, claimed_today, advance.day);

    Ok(Json(DataResponse {
        data: DailyStatus {
            day: user.daily_streak_day,
            next_day,
            claimed_today,
            claimed_days: user.claimed_days,
            current_streak: user.current_streak,
            longest_streak: user.longest_streak,
        },
    }))
}

/// Cycle day the next claim will land on.
///
/// With today already claimed, tomorrow continues the streak (wrapping
/// 7 -> 1); otherwise the pending advancement for today applies as-is.
fn next_claim_day(current_day: i32, claimed_today: bool, pending_day: i32) -> i32 {
    if claimed_today {
        current_day % streak::CYCLE_DAYS + 1
    } else {
        pending_day
    }
}

/// POST /api/v1/daily-rewards/claim
///
/// Claim today's reward through the engine.
pub async fn claim(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DailyClaimOutcome>>> {
    let outcome = claim_daily_reward(&state, auth.user_id).await?;
    Ok(Json(DataResponse { data: outcome }))
}

#[cfg(test)]
mod tests {
    use super::next_claim_day;

    #[test]
    fn next_day_after_todays_claim_continues_the_cycle() {
        assert_eq!(next_claim_day(3, true, 1), 4);
        assert_eq!(next_claim_day(7, true, 1), 1);
    }

    #[test]
    fn next_day_without_todays_claim_is_the_pending_advancement() {
        // Consecutive-day continuation.
        assert_eq!(next_claim_day(3, false, 4), 4);
        // Gap: the pending advancement already resolved to day 1.
        assert_eq!(next_claim_day(5, false, 1), 1);
    }
}
