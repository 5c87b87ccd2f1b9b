use std::collections::HashMap;
use std::sync::{Arc, Weak};

use spriggly_core::types::DbId;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: spriggly_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Per-user locks serializing reward-mutating operations.
    pub user_locks: Arc<UserLocks>,
}

/// Per-user async mutexes.
///
/// Every engine operation acquires the acting user's lock before opening its
/// transaction, so two concurrent requests from the same user cannot
/// double-spend coins or double-claim the daily reward. The map holds weak
/// references: a lock lives only while a guard (or a waiter) holds it, and
/// dead entries are swept whenever a new lock is created, so the map stays
/// bounded by the number of users with operations in flight.
#[derive(Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<DbId, Weak<Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for `user_id`, waiting if another operation for the
    /// same user is in flight. The guard releases on drop.
    pub async fn acquire(&self, user_id: DbId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            match locks.get(&user_id).and_then(Weak::upgrade) {
                Some(lock) => lock,
                None => {
                    // Sweep entries whose last guard is gone before adding
                    // a new one.
                    locks.retain(|_, weak| weak.strong_count() > 0);
                    let lock = Arc::new(Mutex::new(()));
                    locks.insert(user_id, Arc::downgrade(&lock));
                    lock
                }
            }
        };
        lock.lock_owned().await
    }

    /// Number of entries currently in the map (live or not yet swept).
    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_user_operations_serialize() {
        let locks = Arc::new(UserLocks::new());

        let guard = locks.acquire(1).await;

        // A second acquire for the same user must not complete while the
        // first guard is held.
        let locks2 = Arc::clone(&locks);
        let pending = tokio::spawn(async move { locks2.acquire(1).await });
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        drop(guard);
        pending.await.expect("lock task should complete");
    }

    #[tokio::test]
    async fn different_users_do_not_block_each_other() {
        let locks = UserLocks::new();
        let _a = locks.acquire(1).await;
        // Completes immediately despite user 1's lock being held.
        let _b = locks.acquire(2).await;
    }

    #[tokio::test]
    async fn released_locks_are_evicted() {
        let locks = UserLocks::new();
        drop(locks.acquire(1).await);
        assert_eq!(locks.tracked().await, 1);

        // The next lock creation sweeps entries with no outstanding guard.
        let _b = locks.acquire(2).await;
        assert_eq!(locks.tracked().await, 1);
    }

    #[tokio::test]
    async fn held_locks_survive_the_sweep() {
        let locks = UserLocks::new();
        let _a = locks.acquire(1).await;
        let _b = locks.acquire(2).await;
        assert_eq!(locks.tracked().await, 2);
    }
}
