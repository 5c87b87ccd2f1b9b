//! Repository for the `users` table.

use sqlx::{PgPool, Postgres, Transaction};
use spriggly_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, level, xp, coins, \
                       total_coins_earned, total_coins_spent, current_streak, longest_streak, \
                       total_focus_hours, tasks_completed, plants_collected, daily_streak_day, \
                       claimed_days, last_claimed_date, is_active, last_login_at, \
                       failed_login_count, locked_until, created_at, updated_at";

/// Provides CRUD operations and progression updates for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row. Progression counters
    /// start at their column defaults (all zeroed, level 1).
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Lock the user row for the duration of the transaction and return it.
    ///
    /// Every reward-mutating engine operation starts here so two concurrent
    /// requests for the same user serialize at the database as well.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    // -----------------------------------------------------------------------
    // Progression updates (engine, transactional)
    // -----------------------------------------------------------------------

    /// Credit a task-completion payout: XP, coins, earned total, and the
    /// tasks-completed counter.
    pub async fn apply_task_completion(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        xp: i64,
        coins: i64,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                xp = xp + $2,
                coins = coins + $3,
                total_coins_earned = total_coins_earned + $3,
                tasks_completed = tasks_completed + 1,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(xp)
            .bind(coins)
            .fetch_one(&mut **tx)
            .await
    }

    /// Credit a focus-session payout, including the fractional hour delta
    /// added to the running focus-hours total.
    pub async fn apply_focus_completion(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        xp: i64,
        coins: i64,
        hours: f64,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                xp = xp + $2,
                coins = coins + $3,
                total_coins_earned = total_coins_earned + $3,
                total_focus_hours = total_focus_hours + $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(xp)
            .bind(coins)
            .bind(hours)
            .fetch_one(&mut **tx)
            .await
    }

    /// Persist the outcome of a daily claim: coin grant, cycle day, claimed
    /// dates, streak counters, and the last-claimed timestamp.
    #[allow(clippy::too_many_arguments)]
    pub async fn apply_daily_claim(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        coins: i64,
        daily_streak_day: i32,
        claimed_days: &[String],
        current_streak: i32,
        longest_streak: i32,
        last_claimed_date: Timestamp,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                coins = coins + $2,
                total_coins_earned = total_coins_earned + $2,
                daily_streak_day = $3,
                claimed_days = $4,
                current_streak = $5,
                longest_streak = $6,
                last_claimed_date = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(coins)
            .bind(daily_streak_day)
            .bind(claimed_days)
            .bind(current_streak)
            .bind(longest_streak)
            .bind(last_claimed_date)
            .fetch_one(&mut **tx)
            .await
    }

    /// Debit a purchase. The coin check and debit are a single conditional
    /// statement; returns the new balance, or `None` when funds are
    /// insufficient (no mutation happened).
    pub async fn debit_purchase(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        price: i64,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE users SET
                coins = coins - $2,
                total_coins_spent = total_coins_spent + $2,
                updated_at = NOW()
             WHERE id = $1 AND coins >= $2
             RETURNING coins",
        )
        .bind(id)
        .bind(price)
        .fetch_optional(&mut **tx)
        .await
    }

    /// Increment the plants-collected counter (a seed was planted).
    pub async fn increment_plants_collected(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET plants_collected = plants_collected + 1, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Auth bookkeeping
    // -----------------------------------------------------------------------

    /// Increment the failed login counter by 1.
    pub async fn increment_failed_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET failed_login_count = failed_login_count + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Lock a user account until the specified timestamp.
    pub async fn lock_account(
        pool: &PgPool,
        id: DbId,
        until: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET locked_until = $2 WHERE id = $1")
            .bind(id)
            .bind(until)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a successful login: reset `failed_login_count` to 0, clear
    /// `locked_until`, and set `last_login_at` to now.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                failed_login_count = 0,
                locked_until = NULL,
                last_login_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
