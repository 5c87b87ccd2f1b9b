//! Task and focus-session payout formulas.
//!
//! Pure functions and constants used by the engine when finalizing a task or
//! a focus session. All amounts are integral; the late-completion penalty
//! rounds down.

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// XP granted per focused minute of a non-surrendered session.
pub const FOCUS_XP_PER_MINUTE: i64 = 2;

/// Coins granted per focused minute of a non-surrendered session.
pub const FOCUS_COINS_PER_MINUTE: i64 = 2;

/// Percentage of the base reward kept when a task is completed after its
/// due date.
pub const LATE_REWARD_PCT: i64 = 50;

// ---------------------------------------------------------------------------
// Task priority
// ---------------------------------------------------------------------------

/// Task priority, ordinal for reward sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Base XP for on-time completion.
    pub fn base_xp(self) -> i64 {
        match self {
            Self::Low => 10,
            Self::Medium => 25,
            Self::High => 50,
        }
    }

    /// Base coins for on-time completion.
    pub fn base_coins(self) -> i64 {
        match self {
            Self::Low => 15,
            Self::Medium => 40,
            Self::High => 80,
        }
    }

    /// Parse the stored column value (`"low"`, `"medium"`, `"high"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Column value used in the `tasks.priority` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

// ---------------------------------------------------------------------------
// Payout types
// ---------------------------------------------------------------------------

/// Computed payout for a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TaskReward {
    pub xp: i64,
    pub coins: i64,
    /// `true` when the task was completed strictly after its due date and
    /// the late penalty was applied.
    pub past_deadline: bool,
}

/// Computed payout for a finalized focus session.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FocusReward {
    pub xp: i64,
    pub coins: i64,
    /// Hours to add to the user's running focus-hours total
    /// (zero for surrendered sessions).
    pub hours: f64,
}

// ---------------------------------------------------------------------------
// Payout logic
// ---------------------------------------------------------------------------

/// Compute the payout for completing a task.
///
/// Completion strictly after the due date halves both XP and coins,
/// rounding down. A task with no due date is never late.
pub fn task_reward(
    priority: TaskPriority,
    completed_at: Timestamp,
    due_date: Option<Timestamp>,
) -> TaskReward {
    let past_deadline = due_date.is_some_and(|due| completed_at > due);
    let (mut xp, mut coins) = (priority.base_xp(), priority.base_coins());
    if past_deadline {
        xp = xp * LATE_REWARD_PCT / 100;
        coins = coins * LATE_REWARD_PCT / 100;
    }
    TaskReward {
        xp,
        coins,
        past_deadline,
    }
}

/// Compute the payout for a finalized focus session.
///
/// Non-surrendered sessions earn a linear, uncapped 2 XP and 2 coins per
/// minute. Surrendered sessions earn nothing and contribute no focus hours.
pub fn focus_reward(duration_minutes: i64, surrendered: bool) -> FocusReward {
    if surrendered {
        return FocusReward {
            xp: 0,
            coins: 0,
            hours: 0.0,
        };
    }
    FocusReward {
        xp: FOCUS_XP_PER_MINUTE * duration_minutes,
        coins: FOCUS_COINS_PER_MINUTE * duration_minutes,
        hours: duration_minutes as f64 / 60.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 10, hour, 0, 0).unwrap()
    }

    // -- task_reward: on-time table --

    #[test]
    fn on_time_low_priority() {
        let r = task_reward(TaskPriority::Low, ts(10), Some(ts(12)));
        assert_eq!(r, TaskReward { xp: 10, coins: 15, past_deadline: false });
    }

    #[test]
    fn on_time_medium_priority() {
        let r = task_reward(TaskPriority::Medium, ts(10), Some(ts(12)));
        assert_eq!(r, TaskReward { xp: 25, coins: 40, past_deadline: false });
    }

    #[test]
    fn on_time_high_priority() {
        let r = task_reward(TaskPriority::High, ts(10), Some(ts(12)));
        assert_eq!(r, TaskReward { xp: 50, coins: 80, past_deadline: false });
    }

    // -- task_reward: deadline handling --

    #[test]
    fn late_completion_halves_rewards_rounding_down() {
        let r = task_reward(TaskPriority::Low, ts(13), Some(ts(12)));
        // floor(10 * 0.5) = 5, floor(15 * 0.5) = 7
        assert_eq!(r, TaskReward { xp: 5, coins: 7, past_deadline: true });
    }

    #[test]
    fn late_completion_high_priority() {
        let r = task_reward(TaskPriority::High, ts(13), Some(ts(12)));
        assert_eq!(r, TaskReward { xp: 25, coins: 40, past_deadline: true });
    }

    #[test]
    fn completion_exactly_at_due_date_is_on_time() {
        let r = task_reward(TaskPriority::Medium, ts(12), Some(ts(12)));
        assert!(!r.past_deadline);
        assert_eq!(r.xp, 25);
    }

    #[test]
    fn no_due_date_is_never_late() {
        let r = task_reward(TaskPriority::Medium, ts(23), None);
        assert!(!r.past_deadline);
        assert_eq!(r.coins, 40);
    }

    // -- priority parsing --

    #[test]
    fn priority_parse_round_trip() {
        for p in [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High] {
            assert_eq!(TaskPriority::parse(p.as_str()), Some(p));
        }
        assert_eq!(TaskPriority::parse("urgent"), None);
    }

    // -- focus_reward --

    #[test]
    fn focus_reward_is_linear_in_minutes() {
        let r = focus_reward(25, false);
        assert_eq!(r.xp, 50);
        assert_eq!(r.coins, 50);
        assert!((r.hours - 25.0 / 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn focus_reward_is_uncapped() {
        let r = focus_reward(240, false);
        assert_eq!(r.xp, 480);
        assert_eq!(r.coins, 480);
    }

    #[test]
    fn surrendered_session_earns_nothing() {
        let r = focus_reward(90, true);
        assert_eq!(r.xp, 0);
        assert_eq!(r.coins, 0);
        assert_eq!(r.hours, 0.0);
    }
}
