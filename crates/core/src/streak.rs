//! Daily-reward streak advancement.
//!
//! The daily reward runs on a 7-day cycle keyed by calendar date (UTC).
//! A user's streak state is three fields on the user row: the current cycle
//! day (0 = never claimed), the date of the last claim, and the list of
//! dates already claimed in the current run. Advancement here is pure; the
//! engine is responsible for the already-claimed-today rejection and for
//! persisting the outcome.

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of days in the reward cycle. After day 7 the cycle wraps to day 1.
pub const CYCLE_DAYS: i32 = 7;

// ---------------------------------------------------------------------------
// Advancement
// ---------------------------------------------------------------------------

/// Outcome of advancing the streak for a claim on `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakAdvance {
    /// The cycle day (1-7) whose reward should be granted.
    pub day: i32,
    /// `true` when the last claim was exactly yesterday and the streak
    /// carried forward (drives the consecutive-day counters).
    pub continued: bool,
    /// `true` when the continuity check failed for a user with prior claim
    /// history: the engine must clear `claimed_days` before appending today.
    pub reset: bool,
}

/// Advance the streak for a claim on `today`.
///
/// The streak continues only when the last claim was exactly yesterday;
/// day 7 wraps back to day 1. Any gap resets to day 1 -- but a reset is only
/// *reported* when the user has prior claim history. A fresh account
/// (no claims yet) simply advances 0 -> 1 without a reset event.
pub fn advance(
    current_day: i32,
    last_claimed: Option<NaiveDate>,
    today: NaiveDate,
    has_history: bool,
) -> StreakAdvance {
    let yesterday = today.pred_opt();
    let continues = match (last_claimed, yesterday) {
        (Some(last), Some(y)) => last == y,
        _ => false,
    };

    if continues {
        let next = current_day % CYCLE_DAYS + 1;
        StreakAdvance {
            day: next,
            continued: true,
            reset: false,
        }
    } else {
        StreakAdvance {
            day: 1,
            continued: false,
            reset: has_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    // -- continuity --

    #[test]
    fn consecutive_day_advances_by_one() {
        let adv = advance(3, Some(d(9)), d(10), true);
        assert_eq!(adv, StreakAdvance { day: 4, continued: true, reset: false });
    }

    #[test]
    fn day_seven_wraps_to_day_one() {
        let adv = advance(7, Some(d(9)), d(10), true);
        assert_eq!(adv, StreakAdvance { day: 1, continued: true, reset: false });
    }

    #[test]
    fn full_week_of_consecutive_claims_cycles() {
        let mut day = 0;
        for offset in 0..14u32 {
            let last = if offset == 0 { None } else { Some(d(offset)) };
            let adv = advance(day, last, d(offset + 1), offset > 0);
            assert!(!adv.reset);
            day = adv.day;
        }
        // 14 claims: 1..7, then 1..7 again.
        assert_eq!(day, 7);
    }

    // -- gaps --

    #[test]
    fn gap_of_two_days_resets_to_day_one() {
        let adv = advance(5, Some(d(7)), d(10), true);
        assert_eq!(adv, StreakAdvance { day: 1, continued: false, reset: true });
    }

    #[test]
    fn same_day_last_claim_is_not_continuity() {
        // The engine rejects same-day claims before calling advance, but if
        // it ever got here the streak must not continue off today's date.
        let adv = advance(2, Some(d(10)), d(10), true);
        assert_eq!(adv, StreakAdvance { day: 1, continued: false, reset: true });
    }

    // -- fresh accounts --

    #[test]
    fn first_ever_claim_advances_without_reset() {
        // last_claimed defaults to the account-creation date; with no claim
        // history the continuity miss must not surface as a reset event.
        let adv = advance(0, Some(d(1)), d(10), false);
        assert_eq!(adv, StreakAdvance { day: 1, continued: false, reset: false });
    }

    #[test]
    fn first_claim_with_no_last_date_advances_without_reset() {
        let adv = advance(0, None, d(10), false);
        assert_eq!(adv, StreakAdvance { day: 1, continued: false, reset: false });
    }

    #[test]
    fn fresh_account_created_yesterday_still_starts_at_day_one() {
        // Continuity would "pass" (creation date == yesterday) only if the
        // default last-claimed date were treated as a claim; with day 0 the
        // advance still lands on day 1.
        let adv = advance(0, Some(d(9)), d(10), false);
        assert_eq!(adv.day, 1);
        assert!(!adv.reset);
    }
}
