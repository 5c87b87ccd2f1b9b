//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use spriggly_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub level: i32,
    pub xp: i64,
    pub coins: i64,
    pub total_coins_earned: i64,
    pub total_coins_spent: i64,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_focus_hours: f64,
    pub tasks_completed: i32,
    pub plants_collected: i32,
    /// Current day in the 7-day reward cycle; 0 = never claimed.
    pub daily_streak_day: i32,
    /// Date strings (`YYYY-MM-DD`) claimed in the current run.
    pub claimed_days: Vec<String>,
    pub last_claimed_date: Option<Timestamp>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub level: i32,
    pub xp: i64,
    pub coins: i64,
    pub total_coins_earned: i64,
    pub total_coins_spent: i64,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_focus_hours: f64,
    pub tasks_completed: i32,
    pub plants_collected: i32,
    pub daily_streak_day: i32,
    pub claimed_days: Vec<String>,
    pub last_claimed_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            level: user.level,
            xp: user.xp,
            coins: user.coins,
            total_coins_earned: user.total_coins_earned,
            total_coins_spent: user.total_coins_spent,
            current_streak: user.current_streak,
            longest_streak: user.longest_streak,
            total_focus_hours: user.total_focus_hours,
            tasks_completed: user.tasks_completed,
            plants_collected: user.plants_collected,
            daily_streak_day: user.daily_streak_day,
            claimed_days: user.claimed_days,
            last_claimed_date: user.last_claimed_date,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user at registration. Progression counters start
/// zeroed via column defaults.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
